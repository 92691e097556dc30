//! Integration tests for KnnError variants.

use frnn_core::FeatureMatrix;
use frnn_knn::{KnnError, Metric, NeighborSet, euclidean_distance, query_knn};

#[test]
fn error_distance_dimension_mismatch() {
    let result = euclidean_distance(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
    assert!(matches!(
        result,
        Err(KnnError::DimensionMismatch { left: 3, right: 2 })
    ));
}

#[test]
fn error_distance_nan() {
    let result = euclidean_distance(&[0.0, f64::NAN], &[0.0, 0.0]);
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteInput { input: "left" })
    ));
}

#[test]
fn error_distance_inf() {
    let result = euclidean_distance(&[0.0], &[f64::INFINITY]);
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteInput { input: "right" })
    ));
}

#[test]
fn error_query_width_mismatch() {
    let reference = FeatureMatrix::from_rows(&[[0.0, 0.0, 0.0]]).unwrap();
    let query = FeatureMatrix::from_rows(&[[0.0, 0.0]]).unwrap();
    let result = query_knn(&reference, &query, 1);
    assert!(matches!(
        result,
        Err(KnnError::DimensionMismatch { left: 2, right: 3 })
    ));
}

#[test]
fn error_query_non_finite() {
    let reference = FeatureMatrix::from_rows(&[[0.0], [1.0]]).unwrap();
    let query = FeatureMatrix::from_rows(&[[0.5], [f64::INFINITY]]).unwrap();
    let result = query_knn(&reference, &query, 2);
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteInput { input: "query" })
    ));
}

#[test]
fn error_reference_non_finite() {
    let reference = FeatureMatrix::from_rows(&[[0.0], [f64::NAN]]).unwrap();
    let query = FeatureMatrix::from_rows(&[[0.5]]).unwrap();
    let result = query_knn(&reference, &query, 1);
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteInput { input: "reference" })
    ));
}

#[test]
fn error_neighbor_set_shape() {
    let result = NeighborSet::new(vec![vec![0, 1]], vec![vec![0.0]]);
    assert!(matches!(
        result,
        Err(KnnError::NeighborLengthMismatch { row: 0, .. })
    ));
}

#[test]
fn error_unknown_metric() {
    let result = "cosine".parse::<Metric>();
    assert!(matches!(result, Err(KnnError::UnknownMetric { .. })));
}
