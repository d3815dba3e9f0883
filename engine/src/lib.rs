//! Core engine for the lab simulator - navigator, session and workflows.
//!
//! This crate contains the App state machine without TUI dependencies.

use labsim_types::ui::UiOptions;

pub use labsim_types::{
    BreakPoint, ConductanceRecord, CstPoint, Page, PhenolPage, PhenolRecord, RangeError,
    TitrationPage,
};

mod config;
mod error;
mod form;
mod navigator;
mod screen;
mod session;

pub mod phenol;
pub mod titration;

pub use config::{ConfigError, LabConfig, config_path};
pub use error::WorkflowError;
pub use form::{Action, FieldId, Focus, Form, NumberField};
pub use navigator::Navigator;
pub use phenol::PhenolEvent;
pub use screen::{
    Block, ButtonView, FieldView, Highlight, NoticeKind, PlotView, Screen, TableView,
};
pub use session::{Observation, PhenolSession, Session, TitrationSession};
pub use titration::TitrationEvent;

/// Events accepted on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    OpenPhenol,
    OpenTitration,
}

/// A user action, addressed to the workflow that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Home(HomeEvent),
    Phenol(PhenolEvent),
    Titration(TitrationEvent),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Event::Home(HomeEvent::OpenPhenol) => "OpenPhenol",
            Event::Home(HomeEvent::OpenTitration) => "OpenTitration",
            Event::Phenol(event) => event.name(),
            Event::Titration(event) => event.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// One-line message shown under the page until the next successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

/// Application state
#[derive(Debug)]
pub struct App {
    navigator: Navigator,
    session: Session,
    form: Form,
    status: Option<Status>,
    ui_options: UiOptions,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        let session = Session::default();
        let form = Form::for_page(Page::Home, &session);
        Self {
            navigator: Navigator::default(),
            session,
            form,
            status: None,
            ui_options,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.navigator.current()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Render description of the current page, derived fresh from state.
    pub fn screen(&self) -> Result<Screen, WorkflowError> {
        Screen::build(self.page(), &self.session, &self.form)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(Status {
            kind,
            text: message.into(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Show `page` without going through a workflow.
    pub fn navigate(&mut self, page: Page) {
        self.navigator.go(page);
        self.form = Form::for_page(page, &self.session);
    }

    /// Route `event` to the current page's workflow.
    ///
    /// Out-of-range input sets a warning and leaves everything as it was.
    /// Any other failure is logged and returned.
    pub fn dispatch(&mut self, event: Event) -> Result<(), WorkflowError> {
        let page = self.page();
        let rows_before = self.row_counts();
        let result = match (page, event) {
            (Page::Home, Event::Home(HomeEvent::OpenPhenol)) => {
                Ok(Page::Phenol(PhenolPage::Intro))
            }
            (Page::Home, Event::Home(HomeEvent::OpenTitration)) => {
                Ok(Page::Titration(TitrationPage::Intro))
            }
            (Page::Phenol(current), Event::Phenol(event)) => {
                phenol::transition(current, &mut self.session.phenol, event)
            }
            (Page::Titration(current), Event::Titration(event)) => {
                titration::transition(current, &mut self.session.titration, event)
            }
            (page, event) => Err(WorkflowError::UnexpectedEvent {
                page,
                event: event.name(),
            }),
        };

        match result {
            Ok(next) => {
                self.clear_status();
                self.note_duplicate(event, rows_before);
                if self.navigator.go(next) {
                    self.form = Form::for_page(next, &self.session);
                } else {
                    self.form
                        .set_buttons(form::buttons_for(next, &self.session));
                }
                Ok(())
            }
            Err(err) if !err.is_fatal() => {
                tracing::warn!(page = %page, event = event.name(), %err, "Input rejected");
                self.set_status(StatusKind::Warning, err.to_string());
                Ok(())
            }
            Err(err) => {
                tracing::error!(page = %page, event = event.name(), %err, "Workflow error");
                Err(err)
            }
        }
    }

    /// Press `action`, reading any volumes it needs from the form.
    pub fn activate(&mut self, action: Action) -> Result<(), WorkflowError> {
        let event = match action {
            Action::Quit => {
                self.request_quit();
                return Ok(());
            }
            Action::OpenPhenol => Event::Home(HomeEvent::OpenPhenol),
            Action::OpenTitration => Event::Home(HomeEvent::OpenTitration),
            Action::StartPhenol => Event::Phenol(PhenolEvent::Start),
            Action::HeatMixture => Event::Phenol(PhenolEvent::HeatMixture {
                water_ml: self.field_value(FieldId::Water)?,
                phenol_ml: self.field_value(FieldId::Phenol)?,
            }),
            Action::RecordTemperatures => Event::Phenol(PhenolEvent::RecordTemperatures),
            Action::AddWater => Event::Phenol(PhenolEvent::AddWater),
            Action::PlotPhaseDiagram => Event::Phenol(PhenolEvent::Plot),
            Action::StartTitration => Event::Titration(TitrationEvent::Start),
            Action::CalculateNormality => Event::Titration(TitrationEvent::Calculate {
                naoh_used_ml: self.field_value(FieldId::NaohUsed)?,
            }),
            Action::ProceedToTitration => Event::Titration(TitrationEvent::Proceed),
            Action::RecordMeasurement => Event::Titration(TitrationEvent::Record {
                naoh_added_ml: self.field_value(FieldId::NaohAdded)?,
            }),
            Action::PlotTitration => Event::Titration(TitrationEvent::Plot),
            Action::ReturnHome => match self.page() {
                Page::Titration(_) => Event::Titration(TitrationEvent::ReturnHome),
                _ => Event::Phenol(PhenolEvent::ReturnHome),
            },
        };
        self.dispatch(event)
    }

    /// Enter on a button presses it; on a field it commits and moves on.
    pub fn press_enter(&mut self) -> Result<(), WorkflowError> {
        match self.form.focused_button() {
            Some(action) => self.activate(action),
            None => {
                self.form.focus_next();
                Ok(())
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.form.focus_next();
    }

    pub fn focus_prev(&mut self) {
        self.form.focus_prev();
    }

    pub fn enter_char(&mut self, c: char) {
        if let Some(field) = self.form.focused_field_mut() {
            field.draft_mut().enter_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.form.focused_field_mut() {
            field.draft_mut().delete_char();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(field) = self.form.focused_field_mut() {
            field.draft_mut().move_cursor_left();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(field) = self.form.focused_field_mut() {
            field.draft_mut().move_cursor_right();
        }
    }

    pub fn move_cursor_end(&mut self) {
        if let Some(field) = self.form.focused_field_mut() {
            field.draft_mut().move_cursor_end();
        }
    }

    /// Step the focused field by `steps` increments.
    pub fn increment(&mut self, steps: i32) {
        if let Some(field) = self.form.focused_field_mut() {
            let value = field.step(steps);
            tracing::debug!(field = ?field.id(), value, "Field stepped");
        }
    }

    fn field_value(&mut self, id: FieldId) -> Result<f64, WorkflowError> {
        let value = self
            .form
            .value(id)
            .ok_or(WorkflowError::MissingState {
                page: self.navigator.current(),
                what: id.label(),
            })?;
        tracing::debug!(field = ?id, value, "Field committed");
        Ok(value)
    }

    fn row_counts(&self) -> (usize, usize) {
        (
            self.session.phenol.table().len(),
            self.session.titration.table().len(),
        )
    }

    fn note_duplicate(&mut self, event: Event, (phenol_rows, titration_rows): (usize, usize)) {
        match event {
            Event::Phenol(PhenolEvent::RecordTemperatures)
                if self.session.phenol.table().len() == phenol_rows =>
            {
                self.set_status(StatusKind::Info, "Mixture already recorded");
            }
            Event::Titration(TitrationEvent::Record { naoh_added_ml })
                if self.session.titration.table().len() == titration_rows =>
            {
                self.set_status(
                    StatusKind::Info,
                    format!("Reading at {naoh_added_ml:.1} ml already recorded"),
                );
            }
            _ => {}
        }
    }
}
