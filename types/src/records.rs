//! Row types for the two experiment tables.

use crate::table::{Column, Keyed, TableRow};
use crate::{Mixture, TransitionTemps};

/// One heated-and-cooled phenol-water mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhenolRecord {
    pub phenol_ml: f64,
    pub water_ml: f64,
    pub percent_phenol: f64,
    pub disappear_c: f64,
    pub reappear_c: f64,
    pub mean_c: f64,
}

impl PhenolRecord {
    #[must_use]
    pub fn new(mixture: Mixture, temps: TransitionTemps) -> Self {
        Self {
            phenol_ml: mixture.phenol_ml,
            water_ml: mixture.water_ml,
            percent_phenol: mixture.percent_phenol(),
            disappear_c: temps.disappear,
            reappear_c: temps.reappear,
            mean_c: temps.mean(),
        }
    }
}

impl Keyed for PhenolRecord {
    type Key = (f64, f64);

    fn key(&self) -> Self::Key {
        (self.phenol_ml, self.water_ml)
    }
}

impl TableRow for PhenolRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("Phenol (ml)", 2),
        Column::new("Water (ml)", 2),
        Column::new("% Phenol", 2),
        Column::new("Disappear Temp (°C)", 2),
        Column::new("Reappear Temp (°C)", 2),
        Column::new("Mean Temp (°C)", 2),
    ];

    fn cells(&self) -> Vec<f64> {
        vec![
            self.phenol_ml,
            self.water_ml,
            self.percent_phenol,
            self.disappear_c,
            self.reappear_c,
            self.mean_c,
        ]
    }
}

/// One conductance reading after a cumulative NaOH addition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductanceRecord {
    pub naoh_ml: f64,
    pub conductance_ms: f64,
}

impl Keyed for ConductanceRecord {
    type Key = f64;

    fn key(&self) -> Self::Key {
        self.naoh_ml
    }
}

impl TableRow for ConductanceRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("NaOH (ml)", 2),
        Column::new("Conductance (mS)", 3),
    ];

    fn cells(&self) -> Vec<f64> {
        vec![self.naoh_ml, self.conductance_ms]
    }
}
