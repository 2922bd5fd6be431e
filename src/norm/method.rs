//! Configurable normalizer that bundles an operator with an axis.

use super::Axis;
use crate::error::{McdaError, Result};
use crate::primitives::{Matrix, Scalar};
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The normalization operators available to a [`Normalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormMethod {
    /// Ratio to the slice sum, see [`super::sum`].
    #[serde(rename = "sum")]
    Sum,
    /// Ratio to the slice maximum, see [`super::max`].
    #[serde(rename = "max")]
    Max,
    /// Ratio to the slice L2 norm, see [`super::vector`].
    #[serde(rename = "vector")]
    Vector,
    /// Shift of negative slices, see [`super::push_negatives`].
    #[serde(rename = "push_negatives")]
    PushNegatives,
    /// Increment of slices holding a zero, see [`super::add1to0`].
    #[serde(rename = "add1to0")]
    Add1To0,
}

impl NormMethod {
    /// All operators, in declaration order.
    pub const ALL: [NormMethod; 5] = [
        NormMethod::Sum,
        NormMethod::Max,
        NormMethod::Vector,
        NormMethod::PushNegatives,
        NormMethod::Add1To0,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NormMethod::Sum => "sum",
            NormMethod::Max => "max",
            NormMethod::Vector => "vector",
            NormMethod::PushNegatives => "push_negatives",
            NormMethod::Add1To0 => "add1to0",
        }
    }
}

impl fmt::Display for NormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormMethod {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self> {
        NormMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| McdaError::InvalidHyperparameter {
                param: "method".to_string(),
                value: s.to_string(),
                constraint: "one of sum, max, vector, push_negatives, add1to0".to_string(),
            })
    }
}

/// A normalization operator together with the axis it runs along.
///
/// # Example
///
/// ```
/// use mcda_core::norm::{Axis, NormMethod, Normalizer};
/// use mcda_core::primitives::Matrix;
///
/// let mtx = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid matrix dimensions");
/// let normalizer = Normalizer::new(NormMethod::Max).with_axis(Some(Axis::Columns));
/// let out = normalizer.apply(&mtx);
/// assert!((out.get(1, 0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalizer {
    method: NormMethod,
    #[serde(default)]
    axis: Option<Axis>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormMethod::Sum)
    }
}

impl Normalizer {
    /// Creates a normalizer over the flattened matrix.
    #[must_use]
    pub fn new(method: NormMethod) -> Self {
        Self { method, axis: None }
    }

    /// Sets the axis the operator runs along.
    #[must_use]
    pub fn with_axis(mut self, axis: Option<Axis>) -> Self {
        self.axis = axis;
        self
    }

    /// Returns the configured operator.
    #[must_use]
    pub fn method(&self) -> NormMethod {
        self.method
    }

    /// Returns the configured axis.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Applies the operator, widening the result to `f64`.
    #[must_use]
    pub fn apply<T: Scalar>(&self, mtx: &Matrix<T>) -> Matrix<f64> {
        match self.method {
            NormMethod::Sum => super::sum(mtx, self.axis),
            NormMethod::Max => super::max(mtx, self.axis),
            NormMethod::Vector => super::vector(mtx, self.axis),
            NormMethod::PushNegatives => super::push_negatives(mtx, self.axis).to_f64(),
            NormMethod::Add1To0 => super::add1to0(mtx, self.axis).to_f64(),
        }
    }
}

impl Transformer for Normalizer {
    /// Normalizers carry no learned state; fitting only rejects a matrix
    /// without rows.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        if x.n_rows() == 0 {
            return Err(McdaError::not_a_matrix("matrix has no rows"));
        }
        Ok(())
    }

    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        Ok(self.apply(x))
    }
}
