//! Derived results read off the recorded tables.

use crate::{ConductanceRecord, PhenolRecord};

/// The highest mean transition temperature and where it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CstPoint {
    pub cst_temp: f64,
    pub cst_conc: f64,
}

impl CstPoint {
    /// Plot annotation for the CST marker.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "CST = {:.1}°C at {:.1}% phenol",
            self.cst_temp, self.cst_conc
        )
    }
}

/// Locate the CST in rows already sorted by `percent_phenol`.
///
/// Ties resolve to the first maximum in slice order. `None` for no rows.
#[must_use]
pub fn find_cst(rows: &[PhenolRecord]) -> Option<CstPoint> {
    let mut best: Option<&PhenolRecord> = None;
    for row in rows {
        if best.is_none_or(|b| row.mean_c > b.mean_c) {
            best = Some(row);
        }
    }
    best.map(|row| CstPoint {
        cst_temp: row.mean_c,
        cst_conc: row.percent_phenol,
    })
}

/// Minimum of the conductance curve, where the falling branch turns upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakPoint {
    pub naoh_ml: f64,
    pub conductance_ms: f64,
}

impl BreakPoint {
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Break = {:.3} mS at {:.2} ml NaOH",
            self.conductance_ms, self.naoh_ml
        )
    }
}

/// Lowest-conductance reading in rows sorted by volume; first one wins on ties.
#[must_use]
pub fn find_break_point(rows: &[ConductanceRecord]) -> Option<BreakPoint> {
    let mut best: Option<&ConductanceRecord> = None;
    for row in rows {
        if best.is_none_or(|b| row.conductance_ms < b.conductance_ms) {
            best = Some(row);
        }
    }
    best.map(|row| BreakPoint {
        naoh_ml: row.naoh_ml,
        conductance_ms: row.conductance_ms,
    })
}
