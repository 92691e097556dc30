//! Output type for neighbor queries.

use crate::error::KnnError;

/// Nearest neighbors of every query row.
///
/// Holds two index-aligned tables: for query row `q`, `indices()[q][j]` is the
/// reference row of the `j`-th nearest neighbor and `distances()[q][j]` its
/// distance. Rows produced by [`query_knn`](crate::query_knn) are sorted by
/// `(distance, index)` and all have length `min(k, n_reference)`, with
/// finite non-negative distances. Sets built with [`NeighborSet::new`] may
/// carry any distance; the scorers define how degenerate values count.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSet {
    indices: Vec<Vec<usize>>,
    distances: Vec<Vec<f64>>,
}

impl NeighborSet {
    /// Builds a neighbor set from externally supplied tables.
    ///
    /// Ordering within rows and distance values are taken as given.
    ///
    /// # Errors
    ///
    /// - [`KnnError::NeighborRowsMismatch`] if the tables have different row counts.
    /// - [`KnnError::NeighborLengthMismatch`] if a row's index and distance
    ///   lists differ in length.
    pub fn new(indices: Vec<Vec<usize>>, distances: Vec<Vec<f64>>) -> Result<Self, KnnError> {
        if indices.len() != distances.len() {
            return Err(KnnError::NeighborRowsMismatch {
                indices: indices.len(),
                distances: distances.len(),
            });
        }
        for (row, (idx_row, dist_row)) in indices.iter().zip(distances.iter()).enumerate() {
            if idx_row.len() != dist_row.len() {
                return Err(KnnError::NeighborLengthMismatch {
                    row,
                    indices: idx_row.len(),
                    distances: dist_row.len(),
                });
            }
        }
        Ok(Self { indices, distances })
    }

    /// Creates a neighbor set from tables already known to be consistent.
    pub(crate) fn from_parts(indices: Vec<Vec<usize>>, distances: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(indices.len(), distances.len());
        Self { indices, distances }
    }

    /// Number of query rows.
    pub fn n_queries(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if there are no query rows.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Reference indices, one list per query row.
    pub fn indices(&self) -> &[Vec<usize>] {
        &self.indices
    }

    /// Neighbor distances, one list per query row.
    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }

    /// Iterates over `(reference_index, distance)` pairs of query row `q`.
    ///
    /// # Panics
    ///
    /// Panics if `q >= self.n_queries()`.
    pub fn row(&self, q: usize) -> impl ExactSizeIterator<Item = (usize, f64)> + '_ {
        self.indices[q]
            .iter()
            .copied()
            .zip(self.distances[q].iter().copied())
    }

    /// Consumes `self` and returns the `(indices, distances)` tables.
    pub fn into_parts(self) -> (Vec<Vec<usize>>, Vec<Vec<f64>>) {
        (self.indices, self.distances)
    }
}
