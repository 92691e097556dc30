//! JSON payloads written by `export` and printed by `predict`.

use anyhow::{Context, Result};
use serde::Serialize;

use frnn_core::ScoreMatrix;
use frnn_score::select_class;

use crate::convert::{Dataset, Scoring};
use crate::pipeline::PipelineOutput;

/// Name recorded in every fixture's `backend` field.
pub const BACKEND: &str = "embedded_reference";

pub const X_NORM_FILE: &str = "x_norm.json";
pub const KNN_FILE: &str = "knn.json";
pub const SCORES_FILE: &str = "scores.json";

/// Raw and normalized features.
#[derive(Debug, Serialize)]
pub struct XNormFixture {
    pub backend: &'static str,
    pub eps: f64,
    pub x_train: Vec<Vec<f64>>,
    pub x_query: Vec<Vec<f64>>,
    pub x_train_norm: Vec<Vec<f64>>,
    pub x_query_norm: Vec<Vec<f64>>,
}

/// Neighbor indices and distances.
#[derive(Debug, Serialize)]
pub struct KnnFixture<'a> {
    pub backend: &'static str,
    pub metric: &'static str,
    pub k: usize,
    pub indices: &'a [Vec<usize>],
    pub distances: &'a [Vec<f64>],
}

/// NN and FRNN score matrices.
#[derive(Debug, Serialize)]
pub struct ScoresFixture<'a> {
    pub backend: &'static str,
    pub metric: &'static str,
    pub k: usize,
    pub y_train: &'a [usize],
    pub nn_scores: &'a ScoreMatrix,
    pub frnn_scores: &'a ScoreMatrix,
}

/// Predicted classes of one query row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub query: usize,
    pub nn_class: usize,
    pub frnn_class: usize,
}

pub fn x_norm_fixture(dataset: &Dataset, out: &PipelineOutput) -> XNormFixture {
    XNormFixture {
        backend: BACKEND,
        eps: out.eps,
        x_train: dataset.x_train.to_rows(),
        x_query: dataset.x_query.to_rows(),
        x_train_norm: out.x_train_norm.to_rows(),
        x_query_norm: out.x_query_norm.to_rows(),
    }
}

pub fn knn_fixture<'a>(scoring: &Scoring, out: &'a PipelineOutput) -> KnnFixture<'a> {
    KnnFixture {
        backend: BACKEND,
        metric: scoring.metric.as_str(),
        k: scoring.k,
        indices: out.neighbors.indices(),
        distances: out.neighbors.distances(),
    }
}

pub fn scores_fixture<'a>(
    dataset: &'a Dataset,
    scoring: &Scoring,
    out: &'a PipelineOutput,
) -> ScoresFixture<'a> {
    ScoresFixture {
        backend: BACKEND,
        metric: scoring.metric.as_str(),
        k: scoring.k,
        y_train: &dataset.y_train,
        nn_scores: &out.nn_scores,
        frnn_scores: &out.frnn_scores,
    }
}

/// Arg-max classes of both score matrices, one entry per query row.
pub fn predictions(out: &PipelineOutput) -> Vec<Prediction> {
    select_class(&out.nn_scores)
        .into_iter()
        .zip(select_class(&out.frnn_scores))
        .enumerate()
        .map(|(query, (nn_class, frnn_class))| Prediction {
            query,
            nn_class,
            frnn_class,
        })
        .collect()
}

/// Serialize a payload to pretty JSON with two-space indentation.
pub fn to_json<T: Serialize>(payload: &T) -> Result<String> {
    serde_json::to_string_pretty(payload).context("failed to serialize JSON")
}
