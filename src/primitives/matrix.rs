//! Matrix type for 2D numeric data.

use super::{Scalar, Vector};
use crate::error::{McdaError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of numeric values (row-major storage).
///
/// Rows are alternatives and columns are criteria. Every constructor
/// enforces `data.len() == rows * cols`, so a `Matrix` is always
/// rectangular.
///
/// # Examples
///
/// ```
/// use mcda_core::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixParts<T>", bound(deserialize = "T: Copy + Deserialize<'de>"))]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols, or if
    /// rows * cols overflows.
    pub fn from_vec(
        rows: usize,
        cols: usize,
        data: Vec<T>,
    ) -> std::result::Result<Self, &'static str> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err("Data length must equal rows * cols");
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`McdaError::NotAMatrix`] if the rows have uneven lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(McdaError::not_a_matrix(format!(
                    "row {i} has length {}, expected {n_cols}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the matrix as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Builds a matrix of the same shape by applying `f` to every
    /// `(row, col, value)` triple.
    #[must_use]
    pub fn map_indexed<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(usize, usize, T) -> U,
    {
        let cols = self.cols.max(1);
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(k, &v)| f(k / cols, k % cols, v))
            .collect();
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Returns true if any element equals zero.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.data.iter().any(|&v| v == T::ZERO)
    }

    /// Widens every element to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> Matrix<f64> {
        self.map_indexed(|_, _, v| v.to_f64())
    }
}

/// Unchecked wire form of a [`Matrix`].
#[derive(Deserialize)]
struct MatrixParts<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = McdaError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self> {
        Self::from_vec(parts.rows, parts.cols, parts.data).map_err(McdaError::not_a_matrix)
    }
}

/// A vector becomes a single-row matrix.
impl<T> From<Vector<T>> for Matrix<T>
where
    T: Copy,
{
    fn from(v: Vector<T>) -> Self {
        let cols = v.len();
        Self {
            data: v.into_vec(),
            rows: 1,
            cols,
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
