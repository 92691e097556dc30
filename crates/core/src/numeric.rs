//! Guarded arithmetic shared by the normalizer and the scorers.
//!
//! Comparisons are written out (`if v > 0.0 { v } else { 0.0 }`) rather than
//! going through `f64::max`/`f64::min`: on ties and signed zeros the bound
//! wins.

/// Divides `numerator` by `denominator`, falling back to `default`.
///
/// Returns `default` when either operand is non-finite, when
/// `|denominator| <= f64::EPSILON`, or when the quotient itself is
/// non-finite.
///
/// ```
/// use frnn_core::safe_divide;
///
/// assert_eq!(safe_divide(1.0, 4.0, 0.0), 0.25);
/// assert_eq!(safe_divide(1.0, 0.0, -1.0), -1.0);
/// assert_eq!(safe_divide(f64::NAN, 2.0, 0.0), 0.0);
/// ```
pub fn safe_divide(numerator: f64, denominator: f64, default: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator.abs() <= f64::EPSILON {
        return default;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() { ratio } else { default }
}

/// Clamps `value` into `[0, 1]`; non-finite values map to `0.0`.
///
/// `-0.0` maps to `0.0`.
pub fn clamp01(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let lower = if value > 0.0 { value } else { 0.0 };
    if lower < 1.0 { lower } else { 1.0 }
}

/// Rescales each row into a probability distribution.
///
/// Values that are non-finite or `<= 0` are treated as `0.0`. A row whose
/// sanitised sum is positive and finite is divided by that sum; any other
/// non-empty row becomes uniform (`1 / n_cols`). Empty rows stay empty.
pub fn normalize_rows(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter().map(|row| normalize_row(row)).collect()
}

fn normalize_row(row: &[f64]) -> Vec<f64> {
    let n_cols = row.len();
    if n_cols == 0 {
        return Vec::new();
    }

    let sanitized: Vec<f64> = row
        .iter()
        .map(|&v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
        .collect();
    let row_sum: f64 = sanitized.iter().fold(0.0, |acc, &v| acc + v);

    if row_sum > 0.0 && row_sum.is_finite() {
        sanitized.iter().map(|&v| v / row_sum).collect()
    } else {
        vec![1.0 / n_cols as f64; n_cols]
    }
}
