//! Conductometric titration workflow.
//!
//! ```text
//! Intro --Start--> Standardize --Proceed--> Titrate --Plot--> Graph --ReturnHome--> Home
//!                   |      ^                 |     ^
//!                   +------+ Calculate       +-----+ Record
//! ```

use labsim_types::{
    BreakPoint, ConductanceRecord, NAOH_ADDED, NAOH_USED, Page, TitrationPage, conductance_ms,
    find_break_point, naoh_normality,
};

use crate::WorkflowError;
use crate::session::TitrationSession;

/// NaOH volume pre-filled on the standardization page (ml).
pub const DEFAULT_NAOH_USED_ML: f64 = 18.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitrationEvent {
    Start,
    Calculate { naoh_used_ml: f64 },
    Proceed,
    Record { naoh_added_ml: f64 },
    Plot,
    ReturnHome,
}

impl TitrationEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TitrationEvent::Start => "Start",
            TitrationEvent::Calculate { .. } => "Calculate",
            TitrationEvent::Proceed => "Proceed",
            TitrationEvent::Record { .. } => "Record",
            TitrationEvent::Plot => "Plot",
            TitrationEvent::ReturnHome => "ReturnHome",
        }
    }
}

/// Apply `event` on `page`, returning the next page.
pub fn transition(
    page: TitrationPage,
    session: &mut TitrationSession,
    event: TitrationEvent,
) -> Result<Page, WorkflowError> {
    match (page, event) {
        (TitrationPage::Intro, TitrationEvent::Start) => {
            session.reset();
            tracing::info!("Titration experiment started");
            Ok(Page::Titration(TitrationPage::Standardize))
        }
        (TitrationPage::Standardize, TitrationEvent::Calculate { naoh_used_ml }) => {
            let naoh_used_ml = NAOH_USED.check(naoh_used_ml)?;
            let normality = naoh_normality(naoh_used_ml);
            session.normality = Some(normality);
            tracing::info!(naoh_used_ml, normality, "NaOH standardized");
            Ok(Page::Titration(TitrationPage::Standardize))
        }
        // Proceeding does not require a prior Calculate.
        (TitrationPage::Standardize, TitrationEvent::Proceed) => {
            Ok(Page::Titration(TitrationPage::Titrate))
        }
        (TitrationPage::Titrate, TitrationEvent::Record { naoh_added_ml }) => {
            let naoh_added_ml = NAOH_ADDED.check(naoh_added_ml)?;
            session.current_naoh_ml = naoh_added_ml;
            record(session, naoh_added_ml);
            Ok(Page::Titration(TitrationPage::Titrate))
        }
        (TitrationPage::Titrate, TitrationEvent::Plot) => {
            if session.table.is_empty() {
                return Err(WorkflowError::EmptyTable {
                    page: Page::Titration(page),
                });
            }
            Ok(Page::Titration(TitrationPage::Graph))
        }
        (TitrationPage::Graph, TitrationEvent::ReturnHome) => Ok(Page::Home),
        (page, event) => Err(WorkflowError::UnexpectedEvent {
            page: Page::Titration(page),
            event: event.name(),
        }),
    }
}

/// Read the meter at `naoh_ml` and keep the reading unless that volume is already in.
pub fn record(session: &mut TitrationSession, naoh_ml: f64) -> bool {
    let row = ConductanceRecord {
        naoh_ml,
        conductance_ms: conductance_ms(naoh_ml),
    };
    let inserted = session.table.insert(row);
    if inserted {
        tracing::info!(
            naoh_ml,
            conductance_ms = row.conductance_ms,
            "Conductance recorded"
        );
    } else {
        tracing::debug!(naoh_ml, "Volume already recorded");
    }
    inserted
}

/// Lowest reading of the recorded curve.
#[must_use]
pub fn break_point(session: &TitrationSession) -> Option<BreakPoint> {
    find_break_point(&session.sorted_rows())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> TitrationSession {
        let mut session = TitrationSession::default();
        transition(TitrationPage::Intro, &mut session, TitrationEvent::Start).unwrap();
        session
    }

    #[test]
    fn start_clears_readings_and_volume() {
        let mut session = started();
        transition(
            TitrationPage::Titrate,
            &mut session,
            TitrationEvent::Record { naoh_added_ml: 2.0 },
        )
        .unwrap();
        assert_eq!(session.current_naoh_ml(), 2.0);

        transition(TitrationPage::Intro, &mut session, TitrationEvent::Start).unwrap();
        assert!(session.table().is_empty());
        assert_eq!(session.current_naoh_ml(), 0.0);
    }

    #[test]
    fn calculate_stays_on_page_and_sets_normality() {
        let mut session = started();
        let next = transition(
            TitrationPage::Standardize,
            &mut session,
            TitrationEvent::Calculate { naoh_used_ml: 18.5 },
        )
        .unwrap();
        assert_eq!(next, Page::Titration(TitrationPage::Standardize));
        let normality = session.normality().unwrap();
        assert_eq!(format!("{normality:.4}"), "0.0676");
    }

    #[test]
    fn normality_survives_restart() {
        let mut session = started();
        transition(
            TitrationPage::Standardize,
            &mut session,
            TitrationEvent::Calculate { naoh_used_ml: 25.0 },
        )
        .unwrap();
        transition(TitrationPage::Intro, &mut session, TitrationEvent::Start).unwrap();
        assert_eq!(session.normality(), Some(0.05));
    }

    #[test]
    fn calculate_rejects_zero_volume() {
        let mut session = started();
        let err = transition(
            TitrationPage::Standardize,
            &mut session,
            TitrationEvent::Calculate { naoh_used_ml: 0.0 },
        )
        .unwrap_err();
        assert!(!err.is_fatal());
        assert_eq!(session.normality(), None);
    }

    #[test]
    fn proceed_without_calculation() {
        let mut session = started();
        let next = transition(
            TitrationPage::Standardize,
            &mut session,
            TitrationEvent::Proceed,
        )
        .unwrap();
        assert_eq!(next, Page::Titration(TitrationPage::Titrate));
        assert_eq!(session.normality(), None);
    }

    #[test]
    fn record_is_idempotent_per_volume() {
        let mut session = started();
        for _ in 0..3 {
            transition(
                TitrationPage::Titrate,
                &mut session,
                TitrationEvent::Record { naoh_added_ml: 0.0 },
            )
            .unwrap();
        }
        assert_eq!(session.table().len(), 1);
        assert!((session.table().as_slice()[0].conductance_ms - 0.8).abs() < 1e-9);
    }

    #[test]
    fn record_rejects_volume_past_burette() {
        let mut session = started();
        let err = transition(
            TitrationPage::Titrate,
            &mut session,
            TitrationEvent::Record { naoh_added_ml: 8.2 },
        )
        .unwrap_err();
        assert!(matches!(err, WorkflowError::OutOfRange(_)));
        assert!(session.table().is_empty());
    }

    #[test]
    fn plot_requires_readings() {
        let mut session = started();
        let err = transition(TitrationPage::Titrate, &mut session, TitrationEvent::Plot)
            .unwrap_err();
        assert!(err.is_fatal());

        record(&mut session, 1.0);
        let next = transition(TitrationPage::Titrate, &mut session, TitrationEvent::Plot).unwrap();
        assert_eq!(next, Page::Titration(TitrationPage::Graph));
    }

    #[test]
    fn break_point_is_at_equivalence_volume() {
        let mut session = started();
        for volume in [6.0, 0.0, 2.0, 4.0, 8.0] {
            record(&mut session, volume);
        }
        let point = break_point(&session).unwrap();
        assert_eq!(point.naoh_ml, 4.0);
        assert!((point.conductance_ms - 0.4).abs() < 1e-9);
    }

    #[test]
    fn calculate_is_not_accepted_while_titrating() {
        let mut session = started();
        let err = transition(
            TitrationPage::Titrate,
            &mut session,
            TitrationEvent::Calculate { naoh_used_ml: 18.5 },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "cond_titration does not accept Calculate");
    }
}
