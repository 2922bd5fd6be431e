//! mcda-core: building blocks for multi-criteria decision analysis.
//!
//! A decision problem is an `m × n` matrix of alternatives by criteria, a
//! direction per criterion (minimize or maximize) and optional weights.
//! This crate validates those inputs and provides the normalization
//! operators that ranking methods apply before scoring.
//!
//! # Quick Start
//!
//! ```
//! use mcda_core::prelude::*;
//!
//! let dm = DecisionMatrix::from_rows(
//!     vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
//!     vec![MIN, MAX, MAX],
//!     None,
//! )
//! .expect("well formed decision matrix");
//!
//! let by_column = Normalizer::new(NormMethod::Sum).with_axis(Some(Axis::Columns));
//! let normalized = dm.normalized(&by_column).expect("matrix has rows");
//!
//! assert!((normalized.mtx().get(0, 0) - 0.2).abs() < 1e-12);
//! assert!((normalized.mtx().get(1, 0) - 0.8).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: Input validators and the [`DecisionMatrix`](data::DecisionMatrix) model
//! - [`norm`]: Normalization operators (sum, max, vector, push_negatives, add1to0)
//! - [`traits`]: The [`Transformer`] interface
//! - [`error`]: Error type shared by all modules
//! - [`prelude`]: Convenience re-exports

pub mod data;
pub mod error;
pub mod norm;
pub mod prelude;
pub mod primitives;
pub mod traits;

pub use error::{McdaError, Result};
pub use primitives::{Matrix, Scalar, Vector};
pub use traits::Transformer;
