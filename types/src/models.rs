//! Deterministic measurement models.
//!
//! Both experiments read synthetic observations from closed-form functions of
//! a single input. There is no noise and no state: the same input always yields
//! the same observation.

/// Volume of the oxalic acid aliquot used to standardize NaOH (ml).
pub const OXALIC_VOLUME_ML: f64 = 25.0;
/// Normality of the oxalic acid reference solution (N).
pub const OXALIC_NORMALITY: f64 = 0.05;

/// Temperature (°C) at which turbidity disappears on heating.
///
/// Piecewise-linear in the phenol percentage with breakpoints at 10, 30 and 70.
/// The segment at 10 % steps down from 67 °C to 65 °C; the other two joints are
/// continuous.
#[must_use]
pub fn disappearance_temperature(percent_phenol: f64) -> f64 {
    if percent_phenol < 10.0 {
        32.0 + 3.5 * percent_phenol
    } else if percent_phenol < 30.0 {
        65.0 + 0.25 * (percent_phenol - 10.0)
    } else if percent_phenol < 70.0 {
        70.0 - 0.1 * (percent_phenol - 30.0)
    } else {
        66.0 - 0.3 * (percent_phenol - 70.0)
    }
}

/// Temperature (°C) at which turbidity reappears on cooling.
#[must_use]
pub fn reappearance_temperature(percent_phenol: f64, disappear: f64) -> f64 {
    disappear - (2.0 + 0.05 * percent_phenol)
}

/// A pair of observed phase-transition temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTemps {
    pub disappear: f64,
    pub reappear: f64,
}

impl TransitionTemps {
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.disappear + self.reappear) / 2.0
    }
}

#[must_use]
pub fn observe_transition(percent_phenol: f64) -> TransitionTemps {
    let disappear = disappearance_temperature(percent_phenol);
    TransitionTemps {
        disappear,
        reappear: reappearance_temperature(percent_phenol, disappear),
    }
}

/// Conductance (mS) of the acid mixture after `naoh_ml` of titrant.
///
/// Falls by 0.02 mS per 0.2 ml up to 4.0 ml (strong acid neutralized), then
/// rises by 0.03 mS per 0.2 ml past it.
#[must_use]
pub fn conductance_ms(naoh_ml: f64) -> f64 {
    if naoh_ml <= 4.0 {
        0.8 - 0.02 * (naoh_ml / 0.2)
    } else {
        0.6 + 0.03 * ((naoh_ml - 4.0) / 0.2)
    }
}

/// NaOH normality from the volume needed to neutralize the oxalic acid aliquot.
///
/// Callers must pass a positive volume; the standardization range starts at 0.1 ml.
#[must_use]
pub fn naoh_normality(naoh_used_ml: f64) -> f64 {
    (OXALIC_VOLUME_ML * OXALIC_NORMALITY) / naoh_used_ml
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn disappearance_continuous_at_upper_breakpoints() {
        for boundary in [30.0, 70.0] {
            let below = disappearance_temperature(boundary - 1e-9);
            let at = disappearance_temperature(boundary);
            assert!((below - at).abs() < 1e-6, "jump at {boundary}: {below} vs {at}");
        }
    }

    #[test]
    fn disappearance_steps_down_at_ten_percent() {
        let below = disappearance_temperature(10.0 - 1e-9);
        let at = disappearance_temperature(10.0);
        assert!((below - 67.0).abs() < 1e-6);
        assert!(close(at, 65.0));
    }

    #[test]
    fn reappear_below_disappear_across_range() {
        for step in 0..=1000 {
            let percent = f64::from(step) / 10.0;
            let temps = observe_transition(percent);
            assert!(
                temps.reappear < temps.disappear,
                "reappear >= disappear at {percent}%"
            );
        }
    }

    #[test]
    fn five_ml_phenol_in_three_ml_water() {
        let percent = 100.0 * 5.0 / 8.0;
        let temps = observe_transition(percent);
        assert!(close(percent, 62.5));
        assert!(close(temps.disappear, 66.75));
        assert!(close(temps.reappear, 61.625));
        assert!(close(temps.mean(), 64.1875));
    }

    #[test]
    fn five_ml_phenol_in_thirty_six_ml_water() {
        let percent = 100.0 * 5.0 / 41.0;
        let disappear = disappearance_temperature(percent);
        assert!((percent - 12.195).abs() < 1e-3);
        assert!((disappear - 65.549).abs() < 1e-3);
    }

    #[test]
    fn conductance_endpoints() {
        assert!(close(conductance_ms(0.0), 0.8));
        assert!(close(conductance_ms(8.0), 1.2));
    }

    #[test]
    fn conductance_at_equivalence_uses_falling_branch() {
        assert!(close(conductance_ms(4.0), 0.4));
        assert!((conductance_ms(4.2) - 0.63).abs() < 1e-9);
    }

    #[test]
    fn conductance_falls_then_rises() {
        assert!(conductance_ms(2.0) < conductance_ms(0.0));
        assert!(conductance_ms(6.0) > conductance_ms(4.2));
    }

    #[test]
    fn normality_from_default_standardization() {
        let n = naoh_normality(18.5);
        assert!((n - 0.067_568).abs() < 1e-6);
        assert_eq!(format!("{n:.4}"), "0.0676");
    }
}
