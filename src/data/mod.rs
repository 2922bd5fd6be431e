//! Decision matrix data model and its validators.
//!
//! A [`DecisionMatrix`] ties an `m × n` matrix of alternatives by criteria
//! to a criteria direction vector, optional weights and display names. Its
//! constructors run the validators in this module ([`is_mtx`],
//! [`criteriarr`], [`validate_weights`]) so that anything reaching the
//! normalization engine is already well formed.
//!
//! # Example
//!
//! ```
//! use mcda_core::data::{DecisionMatrix, MAX, MIN};
//!
//! let dm = DecisionMatrix::from_rows(
//!     vec![vec![250.0, 16.0], vec![200.0, 16.0], vec![300.0, 32.0]],
//!     vec![MIN, MAX],
//!     Some(vec![0.6, 0.4]),
//! )
//! .expect("well formed decision matrix");
//!
//! assert_eq!(dm.shape(), (3, 2));
//! assert_eq!(dm.anames(), &["A0", "A1", "A2"]);
//! ```

mod criteria;
mod shape;
mod weights;

pub use criteria::{criteriarr, directions, Criterion, MAX, MIN};
pub use shape::{is_mtx, Nested, Shape};
pub use weights::validate_weights;

use crate::error::{McdaError, Result};
use crate::norm::Normalizer;
use crate::primitives::{Matrix, Scalar, Vector};
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Alternatives-by-criteria matrix with its criteria metadata.
///
/// Equality compares the matrix, criteria, weights and names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDecisionMatrix")]
pub struct DecisionMatrix {
    mtx: Matrix<f64>,
    criteria: Vec<Criterion>,
    weights: Option<Vector<f64>>,
    anames: Vec<String>,
    cnames: Vec<String>,
}

impl DecisionMatrix {
    /// Builds a decision matrix, validating every component against the
    /// matrix shape.
    ///
    /// # Errors
    ///
    /// - [`McdaError::NotAMatrix`] if `mtx` has no rows
    /// - [`McdaError::DimensionMismatch`] if criteria or weights don't have
    ///   one entry per column
    /// - [`McdaError::ValueOutOfDomain`] for a criterion other than MIN/MAX
    ///   or an invalid weight
    pub fn new<T, C>(mtx: Matrix<f64>, criteria: C, weights: Option<Vec<f64>>) -> Result<Self>
    where
        T: Scalar,
        C: Into<Vector<T>>,
    {
        Self::build::<T>(mtx, criteria.into(), weights.map(Vector::from_vec)).map_err(|err| {
            debug!(%err, "rejected decision matrix");
            err
        })
    }

    /// Builds a decision matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`McdaError::NotAMatrix`] for ragged or empty rows, otherwise
    /// the same errors as [`DecisionMatrix::new`].
    pub fn from_rows<T, C>(
        rows: Vec<Vec<f64>>,
        criteria: C,
        weights: Option<Vec<f64>>,
    ) -> Result<Self>
    where
        T: Scalar,
        C: Into<Vector<T>>,
    {
        if !is_mtx(&rows) {
            let err = McdaError::not_a_matrix("rows must be non-empty and of equal length");
            debug!(%err, "rejected decision matrix");
            return Err(err);
        }
        Self::new::<T, C>(Matrix::from_rows(rows)?, criteria, weights)
    }

    fn build<T: Scalar>(
        mtx: Matrix<f64>,
        criteria: Vector<T>,
        weights: Option<Vector<f64>>,
    ) -> Result<Self> {
        if !is_mtx(&mtx) {
            return Err(McdaError::not_a_matrix("matrix has no rows"));
        }
        let (rows, cols) = mtx.shape();

        if criteria.len() != cols {
            return Err(McdaError::dimension_mismatch("criteria", cols, criteria.len()));
        }
        let criteria = directions::<T, _>(criteria)?;
        let weights = weights.map(|w| validate_weights(w, cols)).transpose()?;

        debug!(rows, cols, weighted = weights.is_some(), "decision matrix built");
        Ok(Self {
            mtx,
            criteria,
            weights,
            anames: (0..rows).map(|i| format!("A{i}")).collect(),
            cnames: (0..cols).map(|j| format!("C{j}")).collect(),
        })
    }

    /// Replaces the alternative names, one per row.
    ///
    /// # Errors
    ///
    /// Returns [`McdaError::DimensionMismatch`] if the count differs from the
    /// number of rows.
    pub fn with_anames<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anames = collect_names(names, "anames", self.mtx.n_rows())?;
        Ok(self)
    }

    /// Replaces the criteria names, one per column.
    ///
    /// # Errors
    ///
    /// Returns [`McdaError::DimensionMismatch`] if the count differs from the
    /// number of columns.
    pub fn with_cnames<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cnames = collect_names(names, "cnames", self.mtx.n_cols())?;
        Ok(self)
    }

    /// The alternatives-by-criteria values.
    #[must_use]
    pub fn mtx(&self) -> &Matrix<f64> {
        &self.mtx
    }

    /// Optimization direction of each criterion.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Criteria as MIN/MAX sentinels.
    #[must_use]
    pub fn criteria_array(&self) -> Vector<i8> {
        self.criteria.iter().map(|c| c.value()).collect()
    }

    /// Criteria weights, if any were supplied.
    #[must_use]
    pub fn weights(&self) -> Option<&Vector<f64>> {
        self.weights.as_ref()
    }

    /// Alternative (row) names.
    #[must_use]
    pub fn anames(&self) -> &[String] {
        &self.anames
    }

    /// Criteria (column) names.
    #[must_use]
    pub fn cnames(&self) -> &[String] {
        &self.cnames
    }

    /// Returns (alternatives, criteria).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.mtx.shape()
    }

    /// Returns a copy whose matrix went through `normalizer`; criteria,
    /// weights and names are kept.
    ///
    /// # Errors
    ///
    /// Propagates errors from the normalizer.
    pub fn normalized(&self, normalizer: &Normalizer) -> Result<Self> {
        Ok(Self {
            mtx: normalizer.transform(&self.mtx)?,
            ..self.clone()
        })
    }
}

fn collect_names<I, S>(names: I, context: &str, expected: usize) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.len() != expected {
        return Err(McdaError::dimension_mismatch(context, expected, names.len()));
    }
    Ok(names)
}

/// Unvalidated wire form; deserialization goes through the constructors.
#[derive(Deserialize)]
struct RawDecisionMatrix {
    mtx: Matrix<f64>,
    criteria: Vec<i8>,
    weights: Option<Vec<f64>>,
    anames: Option<Vec<String>>,
    cnames: Option<Vec<String>>,
}

impl TryFrom<RawDecisionMatrix> for DecisionMatrix {
    type Error = McdaError;

    fn try_from(raw: RawDecisionMatrix) -> Result<Self> {
        let mut dm = Self::new(raw.mtx, raw.criteria, raw.weights)?;
        if let Some(anames) = raw.anames {
            dm = dm.with_anames(anames)?;
        }
        if let Some(cnames) = raw.cnames {
            dm = dm.with_cnames(cnames)?;
        }
        Ok(dm)
    }
}
