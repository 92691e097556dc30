//! Applying fitted ranges to a matrix.

use frnn_core::{FeatureMatrix, clamp01, safe_divide};

use crate::error::NormalizeError;
use crate::params::NormalizationParams;

/// Rescales every value of `matrix` into `[0, 1]` using `params`.
///
/// For a value `v` in column `c`:
///
/// ```text
/// numerator   = v - mins[c]            (0.0 if v is non-finite)
/// denominator = maxs[c] - mins[c] + eps
/// out         = clamp01(safe_divide(numerator, denominator, 0.0))
/// ```
///
/// A matrix with no rows transforms to an empty matrix of the same width.
///
/// # Errors
///
/// Returns [`NormalizeError::DimensionMismatch`] if `matrix` has rows and its
/// width differs from `params.n_cols()`.
pub fn transform(
    matrix: &FeatureMatrix,
    params: &NormalizationParams,
) -> Result<FeatureMatrix, NormalizeError> {
    if matrix.is_empty() {
        return Ok(FeatureMatrix::empty(matrix.n_cols()));
    }
    if matrix.n_cols() != params.n_cols() {
        return Err(NormalizeError::DimensionMismatch {
            expected: params.n_cols(),
            found: matrix.n_cols(),
        });
    }

    let mins = params.mins();
    let maxs = params.maxs();
    let eps = params.eps();

    Ok(matrix.map_with_column(|c, value| {
        let numerator = if value.is_finite() {
            value - mins[c]
        } else {
            0.0
        };
        let denominator = maxs[c] - mins[c] + eps;
        clamp01(safe_divide(numerator, denominator, 0.0))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit_normalizer;
    use approx::assert_abs_diff_eq;

    fn matrix(rows: &[&[f64]]) -> FeatureMatrix {
        FeatureMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_transform_reference_spans_unit_interval() {
        let reference = matrix(&[&[0.0, 10.0], &[5.0, 20.0], &[10.0, 30.0]]);
        let params = fit_normalizer(&reference, 1e-12);
        let out = transform(&reference, &params).unwrap();

        assert_eq!(out.row(0), &[0.0, 0.0]);
        assert_abs_diff_eq!(out.row(1)[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(out.row(1)[1], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(out.row(2)[0], 1.0, epsilon = 1e-9);
        assert!(out.row(2)[0] < 1.0);
    }

    #[test]
    fn test_transform_constant_column_is_zero() {
        let reference = matrix(&[&[3.0, 1.0], &[3.0, 2.0], &[3.0, 3.0]]);
        let params = fit_normalizer(&reference, 1e-12);
        let out = transform(&reference, &params).unwrap();
        for row in out.rows() {
            assert_eq!(row[0], 0.0);
        }
    }

    #[test]
    fn test_transform_constant_column_with_large_eps() {
        // range 0 + eps 0.5 is above the division guard: (4 - 3) / 0.5 = 2 -> 1
        let reference = matrix(&[&[3.0], &[3.0]]);
        let params = fit_normalizer(&reference, 0.5);
        let query = matrix(&[&[4.0], &[3.25], &[2.0]]);
        let out = transform(&query, &params).unwrap();
        assert_eq!(out.row(0), &[1.0]);
        assert_abs_diff_eq!(out.row(1)[0], 0.5, epsilon = 1e-15);
        assert_eq!(out.row(2), &[0.0]);
    }

    #[test]
    fn test_transform_clamps_out_of_range_queries() {
        let reference = matrix(&[&[0.0], &[1.0]]);
        let params = fit_normalizer(&reference, 0.0);
        let query = matrix(&[&[-5.0], &[0.25], &[7.0]]);
        let out = transform(&query, &params).unwrap();
        assert_eq!(out.as_slice(), &[0.0, 0.25, 1.0]);
    }

    #[test]
    fn test_transform_non_finite_values_map_to_offset() {
        // Non-finite numerators become 0.0, so the output is 0 regardless of min.
        let reference = matrix(&[&[2.0], &[4.0]]);
        let params = fit_normalizer(&reference, 0.0);
        let query = matrix(&[&[f64::NAN], &[f64::INFINITY], &[f64::NEG_INFINITY]]);
        let out = transform(&query, &params).unwrap();
        assert_eq!(out.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_transform_empty_matrix() {
        let reference = matrix(&[&[1.0, 2.0]]);
        let params = fit_normalizer(&reference, 0.0);
        let out = transform(&FeatureMatrix::empty(2), &params).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.n_cols(), 2);
    }

    #[test]
    fn test_transform_empty_params_empty_matrix() {
        let params = fit_normalizer(&FeatureMatrix::empty(0), 1e-12);
        let out = transform(&FeatureMatrix::empty(0), &params).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_transform_dimension_mismatch() {
        let reference = matrix(&[&[1.0, 2.0]]);
        let params = fit_normalizer(&reference, 0.0);
        let query = matrix(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(
            transform(&query, &params),
            Err(NormalizeError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
