//! Number inputs and buttons for the current page.
//!
//! The form is the input-widget boundary: drafts are clamped into their field's
//! range when committed, so workflows only ever see in-range values from here.

use labsim_types::ui::NumberDraft;
use labsim_types::{NAOH_ADDED, NAOH_USED, PHENOL, Page, PhenolPage, TitrationPage, VolumeRange, WATER};

use crate::phenol::{self, DEFAULT_PHENOL_ML};
use crate::session::Session;
use crate::titration::DEFAULT_NAOH_USED_ML;

/// Identifies a number input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Water,
    Phenol,
    NaohUsed,
    NaohAdded,
}

impl FieldId {
    #[must_use]
    pub const fn range(self) -> VolumeRange {
        match self {
            FieldId::Water => WATER,
            FieldId::Phenol => PHENOL,
            FieldId::NaohUsed => NAOH_USED,
            FieldId::NaohAdded => NAOH_ADDED,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::Water => "Water volume (ml)",
            FieldId::Phenol => "Phenol volume (ml)",
            FieldId::NaohUsed => "Volume of NaOH used (ml)",
            FieldId::NaohAdded => "Add NaOH (ml)",
        }
    }
}

/// A button the user can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    OpenPhenol,
    OpenTitration,
    Quit,
    StartPhenol,
    HeatMixture,
    RecordTemperatures,
    AddWater,
    PlotPhaseDiagram,
    StartTitration,
    CalculateNormality,
    ProceedToTitration,
    RecordMeasurement,
    PlotTitration,
    ReturnHome,
}

impl Action {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::OpenPhenol => "Phenol-Water CST",
            Action::OpenTitration => "Conductometric Titration",
            Action::Quit => "Quit",
            Action::StartPhenol | Action::StartTitration => "Start Experiment",
            Action::HeatMixture => "Heat Mixture",
            Action::RecordTemperatures => "Record Temperatures",
            Action::AddWater => "Add More Water (+2ml)",
            Action::PlotPhaseDiagram => "Plot Phase Diagram",
            Action::CalculateNormality => "Calculate NaOH Normality",
            Action::ProceedToTitration => "Proceed to Titration",
            Action::RecordMeasurement => "Record Measurement",
            Action::PlotTitration => "Plot Titration Curve",
            Action::ReturnHome => "Return Home",
        }
    }
}

/// One number input: the committed value plus the text being edited.
#[derive(Debug, Clone)]
pub struct NumberField {
    id: FieldId,
    value: f64,
    draft: NumberDraft,
}

impl NumberField {
    #[must_use]
    pub fn new(id: FieldId, value: f64) -> Self {
        let range = id.range();
        let value = range.clamp(value);
        Self {
            id,
            value,
            draft: NumberDraft::new(range.format(value)),
        }
    }

    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn draft(&self) -> &NumberDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NumberDraft {
        &mut self.draft
    }

    /// Parse and clamp the draft. Unparsable text reverts to the last value.
    pub fn commit(&mut self) -> f64 {
        let range = self.id.range();
        match range.parse(self.draft.text()) {
            Ok(value) => self.value = value,
            Err(err) => tracing::debug!(%err, "Draft reverted"),
        }
        self.draft.set_text(range.format(self.value));
        self.value
    }

    /// Commit, then move `steps` increments.
    pub fn step(&mut self, steps: i32) -> f64 {
        let range = self.id.range();
        self.commit();
        self.value = range.step_by(self.value, steps);
        self.draft.set_text(range.format(self.value));
        self.value
    }
}

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Button(usize),
}

/// Fields and buttons of the page on screen.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<NumberField>,
    buttons: Vec<Action>,
    focus: usize,
}

impl Form {
    /// Fresh form for `page`, with defaults drawn from the session.
    #[must_use]
    pub fn for_page(page: Page, session: &Session) -> Self {
        let fields = match page {
            Page::Phenol(PhenolPage::Prepare) => vec![
                NumberField::new(FieldId::Water, session.phenol.water_ml()),
                NumberField::new(FieldId::Phenol, DEFAULT_PHENOL_ML),
            ],
            Page::Titration(TitrationPage::Standardize) => {
                vec![NumberField::new(FieldId::NaohUsed, DEFAULT_NAOH_USED_ML)]
            }
            Page::Titration(TitrationPage::Titrate) => vec![NumberField::new(
                FieldId::NaohAdded,
                session.titration.current_naoh_ml(),
            )],
            _ => Vec::new(),
        };
        Self {
            fields,
            buttons: buttons_for(page, session),
            focus: 0,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[NumberField] {
        &self.fields
    }

    #[must_use]
    pub fn buttons(&self) -> &[Action] {
        &self.buttons
    }

    /// Swap in a new button row, keeping focus in bounds.
    pub fn set_buttons(&mut self, buttons: Vec<Action>) {
        self.buttons = buttons;
        self.focus = self.focus.min(self.slots().saturating_sub(1));
    }

    #[must_use]
    pub fn focus(&self) -> Option<Focus> {
        if self.focus < self.fields.len() {
            Some(Focus::Field(self.focus))
        } else if self.focus - self.fields.len() < self.buttons.len() {
            Some(Focus::Button(self.focus - self.fields.len()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn focused_button(&self) -> Option<Action> {
        match self.focus()? {
            Focus::Button(index) => self.buttons.get(index).copied(),
            Focus::Field(_) => None,
        }
    }

    #[must_use]
    pub fn focused_field_id(&self) -> Option<FieldId> {
        match self.focus()? {
            Focus::Field(index) => self.fields.get(index).map(NumberField::id),
            Focus::Button(_) => None,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut NumberField> {
        match self.focus()? {
            Focus::Field(index) => self.fields.get_mut(index),
            Focus::Button(_) => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.commit_focused();
        let slots = self.slots();
        if slots > 0 {
            self.focus = (self.focus + 1) % slots;
        }
    }

    pub fn focus_prev(&mut self) {
        self.commit_focused();
        let slots = self.slots();
        if slots > 0 {
            self.focus = (self.focus + slots - 1) % slots;
        }
    }

    /// Committed value of `id`, after flushing every pending draft.
    pub fn value(&mut self, id: FieldId) -> Option<f64> {
        self.commit_all();
        self.fields.iter().find(|f| f.id == id).map(NumberField::value)
    }

    pub fn commit_all(&mut self) {
        for field in &mut self.fields {
            field.commit();
        }
    }

    fn commit_focused(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.commit();
        }
    }

    fn slots(&self) -> usize {
        self.fields.len() + self.buttons.len()
    }
}

/// Buttons offered on `page` given the current session.
#[must_use]
pub fn buttons_for(page: Page, session: &Session) -> Vec<Action> {
    match page {
        Page::Home => vec![Action::OpenPhenol, Action::OpenTitration, Action::Quit],
        Page::Phenol(PhenolPage::Intro) => vec![Action::StartPhenol],
        Page::Phenol(PhenolPage::Prepare) => vec![Action::HeatMixture],
        Page::Phenol(PhenolPage::Observe) => vec![Action::RecordTemperatures],
        Page::Phenol(PhenolPage::Record) => {
            if phenol::can_add_water(&session.phenol) {
                vec![Action::AddWater]
            } else {
                vec![Action::PlotPhaseDiagram]
            }
        }
        Page::Phenol(PhenolPage::Graph) | Page::Titration(TitrationPage::Graph) => {
            vec![Action::ReturnHome]
        }
        Page::Titration(TitrationPage::Intro) => vec![Action::StartTitration],
        Page::Titration(TitrationPage::Standardize) => {
            vec![Action::CalculateNormality, Action::ProceedToTitration]
        }
        Page::Titration(TitrationPage::Titrate) => {
            if session.titration.table().is_empty() {
                vec![Action::RecordMeasurement]
            } else {
                vec![Action::RecordMeasurement, Action::PlotTitration]
            }
        }
    }
}
