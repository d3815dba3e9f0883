//! Axis bounds and tick labels for the experiment plots.

/// Padded `[min, max]` covering every value, never zero-width.
#[must_use]
pub fn axis_bounds(values: impl IntoIterator<Item = f64>) -> [f64; 2] {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for value in values {
        lo = lo.min(value);
        hi = hi.max(value);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    [lo - pad, hi + pad]
}

/// Bounds for the x and y axes of `points`.
#[must_use]
pub fn plot_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    (
        axis_bounds(points.iter().map(|p| p.0)),
        axis_bounds(points.iter().map(|p| p.1)),
    )
}

/// Low, middle and high tick labels.
#[must_use]
pub fn axis_labels(bounds: [f64; 2], decimals: usize) -> Vec<String> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| format!("{v:.decimals$}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_gets_unit_bounds() {
        assert_eq!(axis_bounds(Vec::<f64>::new()), [0.0, 1.0]);
    }

    #[test]
    fn single_value_is_widened() {
        assert_eq!(axis_bounds([4.0]), [3.0, 5.0]);
    }

    #[test]
    fn bounds_pad_five_percent() {
        let ([x_lo, x_hi], [y_lo, y_hi]) = plot_bounds(&[(0.0, 0.4), (8.0, 1.6)]);
        assert!((x_lo + 0.4).abs() < 1e-9);
        assert!((x_hi - 8.4).abs() < 1e-9);
        assert!(y_lo < 0.4 && y_hi > 1.6);
    }

    #[test]
    fn labels_span_bounds() {
        assert_eq!(axis_labels([0.0, 10.0], 1), ["0.0", "5.0", "10.0"]);
    }
}
