//! What the current page shows, as plain data for the renderer.

use labsim_types::{
    NAOH_ADDED, OXALIC_NORMALITY, OXALIC_VOLUME_ML, Page, PhenolPage, TableRow, TitrationPage,
    conductance_ms,
};

use crate::WorkflowError;
use crate::form::{Action, FieldId, Focus, Form};
use crate::phenol;
use crate::session::Session;
use crate::titration;

/// Kind of a highlighted message on the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
}

/// One block of the page body, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(String),
    /// `label: value`, with the value emphasized.
    Observation { label: String, value: String },
    Table(TableView),
    Plot(PlotView),
    Notice { kind: NoticeKind, text: String },
}

impl Block {
    fn text(text: impl Into<String>) -> Self {
        Block::Text(text.into())
    }

    fn observation(label: impl Into<String>, value: impl Into<String>) -> Self {
        Block::Observation {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A table with every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    #[must_use]
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        Self {
            headers: R::COLUMNS.iter().map(|c| c.header).collect(),
            rows: rows.iter().map(TableRow::formatted_cells).collect(),
        }
    }
}

/// A marked point on a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// One line series, ordered by `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotView {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series_label: &'static str,
    pub points: Vec<(f64, f64)>,
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub label: &'static str,
    pub min: String,
    pub max: String,
    pub text: String,
    pub cursor: usize,
    pub focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub action: Action,
    pub label: &'static str,
    pub focused: bool,
}

/// Render description of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub page: Page,
    pub title: &'static str,
    pub blocks: Vec<Block>,
    pub fields: Vec<FieldView>,
    pub buttons: Vec<ButtonView>,
}

impl Screen {
    /// Build the screen for `page`.
    ///
    /// Fails only if the session lacks state the page depends on.
    pub fn build(page: Page, session: &Session, form: &Form) -> Result<Self, WorkflowError> {
        let blocks = match page {
            Page::Home => home_blocks(),
            Page::Phenol(page) => phenol_blocks(page, session)?,
            Page::Titration(page) => titration_blocks(page, session, form)?,
        };
        let focus = form.focus();
        let fields = form
            .fields()
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let range = field.id().range();
                FieldView {
                    id: field.id(),
                    label: field.id().label(),
                    min: range.format(range.min),
                    max: range.format(range.max),
                    text: field.draft().text().to_string(),
                    cursor: field.draft().cursor(),
                    focused: focus == Some(Focus::Field(index)),
                }
            })
            .collect();
        let buttons = form
            .buttons()
            .iter()
            .enumerate()
            .map(|(index, &action)| ButtonView {
                action,
                label: action.label(),
                focused: focus == Some(Focus::Button(index)),
            })
            .collect();
        Ok(Self {
            page,
            title: page.title(),
            blocks,
            fields,
            buttons,
        })
    }

    /// Every visible line of body text, for tests and logs.
    #[must_use]
    pub fn body_text(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Text(text) => lines.push(text.clone()),
                Block::Observation { label, value } => lines.push(format!("{label}: {value}")),
                Block::Notice { text, .. } => lines.push(text.clone()),
                Block::Table(table) => {
                    lines.push(table.headers.join(" | "));
                    lines.extend(table.rows.iter().map(|row| row.join(" | ")));
                }
                Block::Plot(plot) => {
                    lines.push(plot.title.to_string());
                    if let Some(highlight) = &plot.highlight {
                        lines.push(highlight.label.clone());
                    }
                }
            }
        }
        lines
    }
}

fn home_blocks() -> Vec<Block> {
    vec![
        Block::text("Choose an experiment:"),
        Block::observation(
            "Phenol-Water CST",
            "critical solution temperature of a partially miscible pair",
        ),
        Block::observation(
            "Conductometric Titration",
            "strength of HCl and CH₃COOH in a mixture",
        ),
    ]
}

fn phenol_blocks(page: PhenolPage, session: &Session) -> Result<Vec<Block>, WorkflowError> {
    let phenol = &session.phenol;
    let blocks = match page {
        PhenolPage::Intro => vec![
            Block::observation(
                "Aim",
                "Determine the Critical Solution Temperature (CST) of phenol-water system",
            ),
            Block::text("Theory:"),
            Block::text("- Phenol and water show partial miscibility below CST (≈68°C)"),
            Block::text("- At CST, the two phases become completely miscible"),
            Block::text("- This experiment maps the phase boundary by observing turbidity changes"),
        ],
        PhenolPage::Prepare => vec![Block::text(
            "Set the volumes, then heat the mixture until the turbidity disappears.",
        )],
        PhenolPage::Observe => {
            let mixture = phenol.mixture(page)?;
            let observation = phenol::observe(phenol, page)?;
            vec![
                Block::observation(
                    "Mixture",
                    format!(
                        "{:.1} ml phenol + {:.1} ml water ({:.1}% phenol)",
                        mixture.phenol_ml,
                        mixture.water_ml,
                        mixture.percent_phenol()
                    ),
                ),
                Block::text("Observations:"),
                Block::observation(
                    "Turbidity disappears at",
                    format!("{:.1}°C", observation.temps.disappear),
                ),
                Block::observation(
                    "Upon cooling, turbidity reappears at",
                    format!("{:.1}°C", observation.temps.reappear),
                ),
            ]
        }
        PhenolPage::Record => {
            phenol.require_observation(page)?;
            vec![Block::Table(TableView::from_rows(&phenol.sorted_rows()))]
        }
        PhenolPage::Graph => {
            let rows = phenol.sorted_rows();
            let cst = phenol::cst(phenol).ok_or(WorkflowError::EmptyTable {
                page: Page::Phenol(page),
            })?;
            vec![
                Block::Plot(PlotView {
                    title: "Critical Solution Temperature Determination",
                    x_label: "Phenol Concentration (%)",
                    y_label: "Mean Temperature (°C)",
                    series_label: "Mean Temperature",
                    points: rows.iter().map(|r| (r.percent_phenol, r.mean_c)).collect(),
                    highlight: Some(Highlight {
                        x: cst.cst_conc,
                        y: cst.cst_temp,
                        label: cst.label(),
                    }),
                }),
                Block::text("Results:"),
                Block::observation(
                    "Critical Solution Temperature (CST)",
                    format!("{:.1}°C", cst.cst_temp),
                ),
                Block::observation(
                    "Phenol Concentration at CST",
                    format!("{:.1}%", cst.cst_conc),
                ),
            ]
        }
    };
    Ok(blocks)
}

fn titration_blocks(
    page: TitrationPage,
    session: &Session,
    form: &Form,
) -> Result<Vec<Block>, WorkflowError> {
    let titration = &session.titration;
    let blocks = match page {
        TitrationPage::Intro => vec![Block::observation(
            "Aim",
            "Determine strength of HCl and CH₃COOH in mixture",
        )],
        TitrationPage::Standardize => {
            let mut blocks = vec![Block::observation(
                "Oxalic acid",
                format!("{OXALIC_VOLUME_ML:.1} ml of {OXALIC_NORMALITY:.2} N"),
            )];
            if let Some(normality) = titration.normality() {
                blocks.push(Block::Notice {
                    kind: NoticeKind::Success,
                    text: format!("NaOH Normality: {normality:.4} N"),
                });
            }
            blocks
        }
        TitrationPage::Titrate => {
            let volume = draft_volume(form, FieldId::NaohAdded)
                .unwrap_or_else(|| titration.current_naoh_ml());
            let mut blocks = vec![Block::observation(
                format!("Conductance at {} ml", NAOH_ADDED.format(volume)),
                format!("{:.3} mS", conductance_ms(volume)),
            )];
            if titration.table().is_empty() {
                blocks.push(Block::Notice {
                    kind: NoticeKind::Info,
                    text: "No readings recorded yet.".to_string(),
                });
            } else {
                blocks.push(Block::Table(TableView::from_rows(&titration.sorted_rows())));
            }
            blocks
        }
        TitrationPage::Graph => {
            let rows = titration.sorted_rows();
            let point = titration::break_point(titration).ok_or(WorkflowError::EmptyTable {
                page: Page::Titration(page),
            })?;
            vec![
                Block::Plot(PlotView {
                    title: "Conductometric Titration Curve",
                    x_label: "Volume of NaOH (ml)",
                    y_label: "Conductance (mS)",
                    series_label: "Conductance",
                    points: rows.iter().map(|r| (r.naoh_ml, r.conductance_ms)).collect(),
                    highlight: Some(Highlight {
                        x: point.naoh_ml,
                        y: point.conductance_ms,
                        label: point.label(),
                    }),
                }),
                Block::text("Results:"),
                Block::observation("Readings", rows.len().to_string()),
                Block::observation(
                    "Break point",
                    format!(
                        "{:.2} ml NaOH, {:.3} mS",
                        point.naoh_ml, point.conductance_ms
                    ),
                ),
                Block::observation(
                    "NaOH normality",
                    titration.normality().map_or_else(
                        || "not standardized".to_string(),
                        |n| format!("{n:.4} N"),
                    ),
                ),
            ]
        }
    };
    Ok(blocks)
}

/// The volume the field would commit right now, without committing it.
fn draft_volume(form: &Form, id: FieldId) -> Option<f64> {
    let field = form.fields().iter().find(|f| f.id() == id)?;
    Some(id.range().parse(field.draft().text()).unwrap_or(field.value()))
}
