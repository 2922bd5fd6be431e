//! Criteria weight vectors.

use crate::error::{McdaError, Result};
use crate::primitives::Vector;

/// Validates a weight vector against the number of criteria.
///
/// Weights must be finite and non-negative. They are not rescaled; a
/// ranking method that needs them to add up to one normalizes them itself.
///
/// # Errors
///
/// - [`McdaError::DimensionMismatch`] if the length differs from `n_criteria`
/// - [`McdaError::ValueOutOfDomain`] for a negative, `NaN` or infinite weight
///
/// # Examples
///
/// ```
/// use mcda_core::data::validate_weights;
///
/// let w = validate_weights(vec![0.2, 0.5, 0.3], 3).expect("valid weights");
/// assert_eq!(w.len(), 3);
/// assert!(validate_weights(vec![0.2, -0.5, 0.3], 3).is_err());
/// ```
pub fn validate_weights<W: Into<Vector<f64>>>(
    weights: W,
    n_criteria: usize,
) -> Result<Vector<f64>> {
    let weights = weights.into();
    if weights.len() != n_criteria {
        return Err(McdaError::dimension_mismatch(
            "weights",
            n_criteria,
            weights.len(),
        ));
    }
    if let Some((index, w)) = weights
        .iter()
        .enumerate()
        .find(|&(_, w)| !w.is_finite() || w < 0.0)
    {
        return Err(McdaError::value_out_of_domain(
            index,
            w,
            "a finite, non-negative weight",
        ));
    }
    Ok(weights)
}
