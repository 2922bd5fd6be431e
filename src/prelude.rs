//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use mcda_core::prelude::*;
//! ```

pub use crate::data::{criteriarr, is_mtx, Criterion, DecisionMatrix, Nested, Shape, MAX, MIN};
pub use crate::error::McdaError;
pub use crate::norm::{self, Axis, NormMethod, Normalizer};
pub use crate::primitives::{Matrix, Scalar, Vector};
pub use crate::traits::Transformer;
