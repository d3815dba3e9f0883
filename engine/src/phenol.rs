//! Phenol-water CST workflow.
//!
//! ```text
//! Intro --Start--> Prepare --HeatMixture--> Observe --RecordTemperatures--> Record
//!                     ^                                                       |
//!                     +-------------------- AddWater (water < 36 ml) ---------+
//!                                                                             |
//! Home <--ReturnHome-- Graph <------------- Plot (water at 36 ml) ------------+
//! ```

use labsim_types::{
    CstPoint, PHENOL, Page, PhenolPage, PhenolRecord, WATER, find_cst, observe_transition,
};

use crate::WorkflowError;
use crate::session::{Observation, PhenolSession};

/// Water added per "add more water" round (ml).
pub const WATER_INCREMENT_ML: f64 = 2.0;
/// Phenol volume offered on the prepare page.
pub const DEFAULT_PHENOL_ML: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhenolEvent {
    Start,
    HeatMixture { water_ml: f64, phenol_ml: f64 },
    RecordTemperatures,
    AddWater,
    Plot,
    ReturnHome,
}

impl PhenolEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            PhenolEvent::Start => "Start",
            PhenolEvent::HeatMixture { .. } => "HeatMixture",
            PhenolEvent::RecordTemperatures => "RecordTemperatures",
            PhenolEvent::AddWater => "AddWater",
            PhenolEvent::Plot => "Plot",
            PhenolEvent::ReturnHome => "ReturnHome",
        }
    }
}

/// Apply `event` on `page`, returning the next page.
///
/// On error the session is left as it was.
pub fn transition(
    page: PhenolPage,
    session: &mut PhenolSession,
    event: PhenolEvent,
) -> Result<Page, WorkflowError> {
    match (page, event) {
        (PhenolPage::Intro, PhenolEvent::Start) => {
            session.reset();
            tracing::info!("Phenol experiment started");
            Ok(Page::Phenol(PhenolPage::Prepare))
        }
        (
            PhenolPage::Prepare,
            PhenolEvent::HeatMixture {
                water_ml,
                phenol_ml,
            },
        ) => {
            let water_ml = WATER.check(water_ml)?;
            let phenol_ml = PHENOL.check(phenol_ml)?;
            session.water_ml = water_ml;
            session.phenol_ml = Some(phenol_ml);
            session.observation = None;
            tracing::debug!(water_ml, phenol_ml, "Mixture prepared");
            Ok(Page::Phenol(PhenolPage::Observe))
        }
        (PhenolPage::Observe, PhenolEvent::RecordTemperatures) => {
            let observation = observe(session, PhenolPage::Observe)?;
            session.observation = Some(observation);
            record(session)?;
            Ok(Page::Phenol(PhenolPage::Record))
        }
        (PhenolPage::Record, PhenolEvent::AddWater) => {
            let before = session.water_ml;
            session.water_ml = add_water(before);
            tracing::debug!(from = before, to = session.water_ml, "Water added");
            Ok(Page::Phenol(PhenolPage::Prepare))
        }
        (PhenolPage::Record, PhenolEvent::Plot) => {
            if session.table.is_empty() {
                return Err(WorkflowError::EmptyTable {
                    page: Page::Phenol(page),
                });
            }
            Ok(Page::Phenol(PhenolPage::Graph))
        }
        (PhenolPage::Graph, PhenolEvent::ReturnHome) => Ok(Page::Home),
        (page, event) => Err(WorkflowError::UnexpectedEvent {
            page: Page::Phenol(page),
            event: event.name(),
        }),
    }
}

/// Observation for the stored mixture, as shown on the observe page.
pub fn observe(session: &PhenolSession, page: PhenolPage) -> Result<Observation, WorkflowError> {
    let mixture = session.mixture(page)?;
    Ok(Observation {
        temps: observe_transition(mixture.percent_phenol()),
        total_ml: mixture.total_ml(),
    })
}

/// Append the stored observation unless this `(phenol, water)` pair is already in.
///
/// Returns whether a row was added.
pub fn record(session: &mut PhenolSession) -> Result<bool, WorkflowError> {
    let mixture = session.mixture(PhenolPage::Record)?;
    let observation = session.require_observation(PhenolPage::Record)?;
    let row = PhenolRecord::new(mixture, observation.temps);
    let inserted = session.table.insert(row);
    if inserted {
        tracing::info!(
            phenol_ml = row.phenol_ml,
            water_ml = row.water_ml,
            percent = row.percent_phenol,
            mean_c = row.mean_c,
            "Phenol row recorded"
        );
    } else {
        tracing::debug!(
            phenol_ml = row.phenol_ml,
            water_ml = row.water_ml,
            "Mixture already recorded"
        );
    }
    Ok(inserted)
}

/// Next water volume after one "add more water" round, capped at the range maximum.
#[must_use]
pub fn add_water(water_ml: f64) -> f64 {
    (water_ml + WATER_INCREMENT_ML).min(WATER.max)
}

/// Whether the record page should offer more water rather than the plot.
#[must_use]
pub fn can_add_water(session: &PhenolSession) -> bool {
    session.water_ml < WATER.max
}

/// CST of the recorded table, read in ascending phenol order.
#[must_use]
pub fn cst(session: &PhenolSession) -> Option<CstPoint> {
    find_cst(&session.sorted_rows())
}
