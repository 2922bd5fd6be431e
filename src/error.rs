//! Error types for decision-matrix operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for validation and normalization operations.
///
/// Numeric domain problems (a zero denominator in a ratio) are deliberately
/// absent: those propagate as `NaN`/`inf` values instead of errors.
///
/// # Examples
///
/// ```
/// use mcda_core::error::McdaError;
///
/// let err = McdaError::DimensionMismatch {
///     expected: "criteria=3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum McdaError {
    /// An element lies outside the set of accepted values.
    ValueOutOfDomain {
        /// Position of the first offending element
        index: usize,
        /// Offending value, rendered
        value: String,
        /// Accepted domain description
        expected: String,
    },

    /// Vector/matrix dimensions don't agree.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Input is not a two-dimensional rectangular matrix.
    NotAMatrix {
        /// Why the input was rejected
        reason: String,
    },

    /// Axis index outside `{0, 1}`.
    InvalidAxis {
        /// Provided axis index
        axis: usize,
    },

    /// Invalid configuration value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for McdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McdaError::ValueOutOfDomain {
                index,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Value out of domain at index {index}: {value}, expected {expected}"
                )
            }
            McdaError::DimensionMismatch { expected, actual } => {
                write!(f, "Matrix dimension mismatch: expected {expected}, got {actual}")
            }
            McdaError::NotAMatrix { reason } => {
                write!(f, "Not a rectangular matrix: {reason}")
            }
            McdaError::InvalidAxis { axis } => {
                write!(f, "Invalid axis {axis}: expected 0 (columns) or 1 (rows)")
            }
            McdaError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            McdaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for McdaError {}

impl From<&str> for McdaError {
    fn from(msg: &str) -> Self {
        McdaError::Other(msg.to_string())
    }
}

impl From<String> for McdaError {
    fn from(msg: String) -> Self {
        McdaError::Other(msg)
    }
}

impl McdaError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a value-out-of-domain error for the element at `index`
    #[must_use]
    pub fn value_out_of_domain(index: usize, value: impl fmt::Debug, expected: &str) -> Self {
        Self::ValueOutOfDomain {
            index,
            value: format!("{value:?}"),
            expected: expected.to_string(),
        }
    }

    /// Create a not-a-matrix error
    #[must_use]
    pub fn not_a_matrix(reason: impl Into<String>) -> Self {
        Self::NotAMatrix {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, McdaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_out_of_domain_display() {
        let err = McdaError::value_out_of_domain(4, 2, "-1 (MIN) or 1 (MAX)");
        let msg = err.to_string();
        assert!(msg.contains("out of domain"));
        assert!(msg.contains("index 4"));
        assert!(msg.contains('2'));
        assert!(msg.contains("MIN"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = McdaError::DimensionMismatch {
            expected: "3x4".to_string(),
            actual: "3x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("3x4"));
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = McdaError::dimension_mismatch("weights", 3, 5);
        let msg = err.to_string();
        assert!(msg.contains("weights=3"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_not_a_matrix_display() {
        let err = McdaError::not_a_matrix("row 1 has length 1, expected 2");
        assert!(err.to_string().contains("Not a rectangular matrix"));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_invalid_axis_display() {
        let err = McdaError::InvalidAxis { axis: 2 };
        assert!(err.to_string().contains("Invalid axis 2"));
    }

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = McdaError::InvalidHyperparameter {
            param: "method".to_string(),
            value: "median".to_string(),
            constraint: "one of sum, max".to_string(),
        };
        assert!(err.to_string().contains("Invalid hyperparameter"));
        assert!(err.to_string().contains("median"));
    }

    #[test]
    fn test_from_str() {
        let err: McdaError = "test error".into();
        assert!(matches!(err, McdaError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: McdaError = "test error".to_string().into();
        assert_eq!(err, McdaError::Other("test error".to_string()));
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;
        let err = McdaError::InvalidAxis { axis: 7 };
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<McdaError>();
    }
}
