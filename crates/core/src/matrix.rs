//! Row-major feature matrix.

use crate::error::MatrixError;

/// Dense row-major table of `f64` features with a fixed column count.
///
/// The column count is established once at construction and shared by every
/// row. Ragged input is rejected rather than padded or truncated.
///
/// # Example
///
/// ```
/// use frnn_core::FeatureMatrix;
///
/// let m = FeatureMatrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
/// assert_eq!(m.n_rows(), 2);
/// assert_eq!(m.n_cols(), 2);
/// assert_eq!(m.row(1), &[2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl FeatureMatrix {
    /// Builds a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `data.len()` is not a multiple
    /// of `n_cols`, or if `n_cols == 0` and `data` is non-empty.
    pub fn new(data: Vec<f64>, n_cols: usize) -> Result<Self, MatrixError> {
        if n_cols == 0 {
            if !data.is_empty() {
                return Err(MatrixError::ShapeMismatch {
                    len: data.len(),
                    n_cols,
                });
            }
            return Ok(Self::empty(0));
        }
        if !data.len().is_multiple_of(n_cols) {
            return Err(MatrixError::ShapeMismatch {
                len: data.len(),
                n_cols,
            });
        }
        let n_rows = data.len() / n_cols;
        Ok(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    /// Builds a matrix from a sequence of rows.
    ///
    /// The width of the first row fixes the column count; an empty sequence
    /// yields a `0 × 0` matrix. Rows of width zero are allowed as long as every
    /// row has width zero.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRow`] for the first row whose width differs
    /// from the first row's.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRow {
                    row: row_idx,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            n_rows: rows.len(),
            n_cols,
        })
    }

    /// Creates a matrix with no rows and the given width.
    pub fn empty(n_cols: usize) -> Self {
        Self {
            data: Vec::new(),
            n_rows: 0,
            n_cols,
        }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `true` if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Returns row `idx` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.n_rows()`.
    pub fn row(&self, idx: usize) -> &[f64] {
        assert!(
            idx < self.n_rows,
            "row index {idx} out of bounds for {} rows",
            self.n_rows
        );
        &self.data[idx * self.n_cols..(idx + 1) * self.n_cols]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.n_rows).map(move |i| &self.data[i * self.n_cols..(i + 1) * self.n_cols])
    }

    /// Iterates over the values of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.n_cols()` and the matrix has rows.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows().map(move |r| r[col])
    }

    /// Builds a matrix of the same shape by applying `f(column, value)` to
    /// every value in row-major order.
    pub fn map_with_column(&self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| f(i % self.n_cols, v))
            .collect();
        Self {
            data,
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns `true` if no value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}
