use ordered_float::OrderedFloat;

/// Smallest width a nonzero value may collapse to, in percent of the track.
pub const MIN_VISIBLE_WIDTH_PERCENT: f64 = 1.0;

/// Converts magnitudes into proportional display widths in `0..=100`.
///
/// The largest value maps to 100 and every other positive value scales
/// linearly against it, floored at [`MIN_VISIBLE_WIDTH_PERCENT`]. Zero maps to
/// zero. Negative and non-finite values are treated as zero magnitude: they
/// get width 0 and are ignored when picking the maximum.
#[must_use]
pub fn widths_from_values(values: &[f64]) -> Vec<f64> {
    let Some(max_value) = max_visible_value(values) else {
        return vec![0.0; values.len()];
    };

    values
        .iter()
        .map(|&value| {
            if !is_visible_magnitude(value) {
                return 0.0;
            }
            (value / max_value * 100.0).max(MIN_VISIBLE_WIDTH_PERCENT)
        })
        .collect()
}

fn max_visible_value(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|value| is_visible_magnitude(*value))
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
}

fn is_visible_magnitude(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
