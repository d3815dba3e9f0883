//! Phenol-water mixture composition.

/// Volumes of a prepared phenol-water mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixture {
    pub phenol_ml: f64,
    pub water_ml: f64,
}

impl Mixture {
    #[must_use]
    pub const fn new(phenol_ml: f64, water_ml: f64) -> Self {
        Self {
            phenol_ml,
            water_ml,
        }
    }

    #[must_use]
    pub fn total_ml(&self) -> f64 {
        self.phenol_ml + self.water_ml
    }

    /// Phenol share of the total volume, in percent (v/v).
    #[must_use]
    pub fn percent_phenol(&self) -> f64 {
        100.0 * self.phenol_ml / self.total_ml()
    }
}
