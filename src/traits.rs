//! Core traits for matrix transformers.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for data transformers (normalizers, shifters).
///
/// This trait defines the interface for preprocessing a decision matrix
/// before a ranking method consumes it.
///
/// # Examples
///
/// ```
/// use mcda_core::prelude::*;
///
/// let x = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid matrix dimensions");
/// let mut normalizer = Normalizer::new(NormMethod::Sum);
/// let x_scaled = normalizer.fit_transform(&x).expect("matrix has rows");
/// assert!((x_scaled.as_slice().iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer cannot handle `x`.
    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}
