//! Normalize, search and score in one pass.

use anyhow::{Context, Result};
use tracing::info;

use frnn_core::{FeatureMatrix, ScoreMatrix};
use frnn_knn::{NeighborSet, query_knn};
use frnn_normalize::{fit_normalizer, transform};
use frnn_score::{frnn_score, n_classes, nn_score};

use crate::convert::{Dataset, Scoring};

/// Every intermediate and final result of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Effective epsilon after clamping to `>= 0`.
    pub eps: f64,
    pub x_train_norm: FeatureMatrix,
    pub x_query_norm: FeatureMatrix,
    pub neighbors: NeighborSet,
    pub n_classes: usize,
    pub nn_scores: ScoreMatrix,
    pub frnn_scores: ScoreMatrix,
}

/// Runs the full pipeline on `dataset`.
pub fn run(dataset: &Dataset, scoring: &Scoring) -> Result<PipelineOutput> {
    let params = fit_normalizer(&dataset.x_train, scoring.eps);
    let x_train_norm =
        transform(&dataset.x_train, &params).context("failed to normalize x_train")?;
    let x_query_norm =
        transform(&dataset.x_query, &params).context("failed to normalize x_query")?;
    info!(
        n_train = x_train_norm.n_rows(),
        n_query = x_query_norm.n_rows(),
        n_features = params.n_cols(),
        "features normalized"
    );

    let neighbors =
        query_knn(&x_train_norm, &x_query_norm, scoring.k).context("neighbor search failed")?;
    info!(k = scoring.k, metric = %scoring.metric, "neighbors found");

    let n_classes = n_classes(&dataset.y_train);
    let nn_scores =
        nn_score(&neighbors, &dataset.y_train, n_classes).context("NN scoring failed")?;
    let frnn_scores =
        frnn_score(&neighbors, &dataset.y_train, n_classes).context("FRNN scoring failed")?;
    info!(n_classes, "scores computed");

    Ok(PipelineOutput {
        eps: params.eps(),
        x_train_norm,
        x_query_norm,
        neighbors,
        n_classes,
        nn_scores,
        frnn_scores,
    })
}
