//! Declared bounds for every number input.
//!
//! The input widgets clamp into these ranges; the workflows re-check them and
//! reject anything outside, so a bypassed widget can never feed the models.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("{label} must be between {min:.1} and {max:.1} ml (got {value})")]
    OutOfRange {
        label: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{label}: '{text}' is not a number")]
    NotANumber { label: &'static str, text: String },
}

/// Inclusive volume bounds with the step used by increment/decrement keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Water added to the phenol sample.
pub const WATER: VolumeRange = VolumeRange::new("Water volume", 3.0, 36.0, 0.1);
/// Phenol in the sample tube.
pub const PHENOL: VolumeRange = VolumeRange::new("Phenol volume", 5.0, 10.0, 0.1);
/// NaOH consumed by the oxalic acid aliquot.
pub const NAOH_USED: VolumeRange = VolumeRange::new("Volume of NaOH used", 0.1, 50.0, 0.1);
/// Cumulative NaOH added to the acid mixture.
pub const NAOH_ADDED: VolumeRange = VolumeRange::new("Add NaOH", 0.0, 8.0, 0.2);

impl VolumeRange {
    #[must_use]
    pub const fn new(label: &'static str, min: f64, max: f64, step: f64) -> Self {
        assert!(min <= max, "VolumeRange min must not exceed max");
        Self {
            label,
            min,
            max,
            step,
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject values outside the range. NaN is rejected too.
    pub fn check(&self, value: f64) -> Result<f64, RangeError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(RangeError::OutOfRange {
                label: self.label,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Clamp into the range and round to the step's decimal precision.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        round_to(value.clamp(self.min, self.max), self.decimals())
    }

    /// Move `steps` increments away from `value`, staying inside the range.
    #[must_use]
    pub fn step_by(&self, value: f64, steps: i32) -> f64 {
        self.clamp(value + f64::from(steps) * self.step)
    }

    /// Parse user text and clamp it into the range.
    pub fn parse(&self, text: &str) -> Result<f64, RangeError> {
        let trimmed = text.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| self.clamp(v))
            .ok_or_else(|| RangeError::NotANumber {
                label: self.label,
                text: trimmed.to_string(),
            })
    }

    /// Decimal places implied by the step (0.1 and 0.2 both give one).
    #[must_use]
    pub fn decimals(&self) -> usize {
        let mut decimals = 0;
        let mut scaled = self.step;
        while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
            scaled *= 10.0;
            decimals += 1;
        }
        decimals
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.decimals())
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_bounds_inclusive() {
        assert_eq!(WATER.check(3.0), Ok(3.0));
        assert_eq!(WATER.check(36.0), Ok(36.0));
        assert!(WATER.check(36.1).is_err());
        assert!(NAOH_ADDED.check(-0.2).is_err());
        assert!(PHENOL.check(f64::NAN).is_err());
    }

    #[test]
    fn out_of_range_message_names_the_field() {
        let err = PHENOL.check(12.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Phenol volume must be between 5.0 and 10.0 ml (got 12)"
        );
    }

    #[test]
    fn clamp_pins_to_nearest_bound() {
        assert_eq!(WATER.clamp(1.0), 3.0);
        assert_eq!(WATER.clamp(99.0), 36.0);
        assert_eq!(NAOH_USED.clamp(f64::NAN), 0.1);
    }

    #[test]
    fn stepping_does_not_accumulate_float_noise() {
        let mut value = WATER.min;
        for _ in 0..7 {
            value = WATER.step_by(value, 1);
        }
        assert_eq!(value, 3.7);
        assert_eq!(NAOH_ADDED.step_by(0.4, 1), 0.6);
    }

    #[test]
    fn stepping_stops_at_bounds() {
        assert_eq!(NAOH_ADDED.step_by(8.0, 1), 8.0);
        assert_eq!(NAOH_ADDED.step_by(0.0, -1), 0.0);
    }

    #[test]
    fn parse_clamps_and_rejects_garbage() {
        assert_eq!(PHENOL.parse(" 7.25 "), Ok(7.3));
        assert_eq!(PHENOL.parse("42"), Ok(10.0));
        assert!(matches!(
            PHENOL.parse("abc"),
            Err(RangeError::NotANumber { .. })
        ));
        assert!(PHENOL.parse("inf").is_err());
    }

    #[test]
    fn decimals_follow_step() {
        assert_eq!(WATER.decimals(), 1);
        assert_eq!(NAOH_ADDED.decimals(), 1);
        assert_eq!(VolumeRange::new("x", 0.0, 10.0, 1.0).decimals(), 0);
        assert_eq!(NAOH_USED.format(18.5), "18.5");
    }
}
