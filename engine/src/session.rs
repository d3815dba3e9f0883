//! Session-scoped experiment state.
//!
//! Created with the app, mutated only by workflow transitions, dropped when the
//! process exits. Each workflow's Start action rebuilds its half from scratch.

use labsim_types::{
    ConductanceRecord, Mixture, Page, PhenolPage, PhenolRecord, RecordTable, TransitionTemps,
    WATER,
};

use crate::WorkflowError;

/// Temperatures read on the observe page, stored for the record page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub temps: TransitionTemps,
    pub total_ml: f64,
}

#[derive(Debug, Clone)]
pub struct PhenolSession {
    pub(crate) water_ml: f64,
    pub(crate) phenol_ml: Option<f64>,
    pub(crate) observation: Option<Observation>,
    pub(crate) table: RecordTable<PhenolRecord>,
}

impl Default for PhenolSession {
    fn default() -> Self {
        Self {
            water_ml: WATER.min,
            phenol_ml: None,
            observation: None,
            table: RecordTable::new(),
        }
    }
}

impl PhenolSession {
    #[must_use]
    pub fn water_ml(&self) -> f64 {
        self.water_ml
    }

    #[must_use]
    pub fn phenol_ml(&self) -> Option<f64> {
        self.phenol_ml
    }

    #[must_use]
    pub fn observation(&self) -> Option<Observation> {
        self.observation
    }

    #[must_use]
    pub fn table(&self) -> &RecordTable<PhenolRecord> {
        &self.table
    }

    /// Rows sorted ascending by phenol percentage.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<PhenolRecord> {
        self.table.sorted_by(|r| r.percent_phenol)
    }

    /// The mixture prepared on the prepare page.
    pub fn mixture(&self, page: PhenolPage) -> Result<Mixture, WorkflowError> {
        let phenol_ml = self.phenol_ml.ok_or(WorkflowError::MissingState {
            page: Page::Phenol(page),
            what: "phenol volume",
        })?;
        Ok(Mixture::new(phenol_ml, self.water_ml))
    }

    pub fn require_observation(&self, page: PhenolPage) -> Result<Observation, WorkflowError> {
        self.observation.ok_or(WorkflowError::MissingState {
            page: Page::Phenol(page),
            what: "transition temperatures",
        })
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct TitrationSession {
    pub(crate) normality: Option<f64>,
    pub(crate) current_naoh_ml: f64,
    pub(crate) table: RecordTable<ConductanceRecord>,
}

impl TitrationSession {
    /// Standardized NaOH normality, once Calculate has run.
    #[must_use]
    pub fn normality(&self) -> Option<f64> {
        self.normality
    }

    #[must_use]
    pub fn current_naoh_ml(&self) -> f64 {
        self.current_naoh_ml
    }

    #[must_use]
    pub fn table(&self) -> &RecordTable<ConductanceRecord> {
        &self.table
    }

    /// Rows sorted ascending by NaOH volume.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<ConductanceRecord> {
        self.table.sorted_by(|r| r.naoh_ml)
    }

    /// Start over. The normality survives: it belongs to the NaOH stock, not the run.
    pub(crate) fn reset(&mut self) {
        self.table.clear();
        self.current_naoh_ml = 0.0;
    }
}

/// Everything one interactive session knows.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub phenol: PhenolSession,
    pub titration: TitrationSession,
}
