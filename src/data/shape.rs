//! Shape inspection for nested sequences and arrays.

use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// An arbitrarily nested sequence of values, as it arrives from a caller.
///
/// Nothing about the nesting is assumed: lists may hold values and lists
/// side by side, or lists of different lengths. Deserializes from plain
/// JSON arrays.
///
/// ```
/// use mcda_core::data::Nested;
///
/// let ragged: Nested<i32> = serde_json::from_str("[[1, 2], [1]]").expect("valid json");
/// assert_eq!(ragged, Nested::rows(vec![vec![1, 2], vec![1]]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A sequence of nested items.
    List(Vec<Nested<T>>),
    /// A single scalar.
    Value(T),
}

impl<T> Nested<T> {
    /// A one-level list of values.
    #[must_use]
    pub fn flat(values: Vec<T>) -> Self {
        Nested::List(values.into_iter().map(Nested::Value).collect())
    }

    /// A two-level list, one inner list per row.
    #[must_use]
    pub fn rows(rows: Vec<Vec<T>>) -> Self {
        Nested::List(rows.into_iter().map(Nested::flat).collect())
    }
}

/// Anything whose n-dimensional shape can be inspected.
pub trait Shape {
    /// Extent along each dimension, or `None` if the input is ragged and
    /// therefore has no well-defined shape.
    fn shape_of(&self) -> Option<Vec<usize>>;
}

impl<T> Shape for Nested<T> {
    fn shape_of(&self) -> Option<Vec<usize>> {
        match self {
            Nested::Value(_) => Some(Vec::new()),
            Nested::List(items) => {
                let mut inner: Option<Vec<usize>> = None;
                for item in items {
                    let dims = item.shape_of()?;
                    match &inner {
                        Some(expected) if *expected != dims => return None,
                        Some(_) => {}
                        None => inner = Some(dims),
                    }
                }
                let mut dims = vec![items.len()];
                dims.extend(inner.unwrap_or_default());
                Some(dims)
            }
        }
    }
}

impl<T> Shape for [Vec<T>] {
    fn shape_of(&self) -> Option<Vec<usize>> {
        let Some(first) = self.first() else {
            return Some(vec![0]);
        };
        let cols = first.len();
        if self.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(vec![self.len(), cols])
    }
}

impl<T> Shape for Vec<Vec<T>> {
    fn shape_of(&self) -> Option<Vec<usize>> {
        self.as_slice().shape_of()
    }
}

impl<T: Copy> Shape for Matrix<T> {
    fn shape_of(&self) -> Option<Vec<usize>> {
        let (rows, cols) = self.shape();
        Some(vec![rows, cols])
    }
}

impl<T: Copy> Shape for Vector<T> {
    fn shape_of(&self) -> Option<Vec<usize>> {
        Some(vec![self.len()])
    }
}

/// Returns true iff `x` is a two-dimensional rectangular matrix with at
/// least one row.
///
/// Never panics: ragged or mixed-depth input simply yields `false`.
///
/// ```
/// use mcda_core::data::{is_mtx, Nested};
///
/// assert!(is_mtx(&vec![vec![1, 2], vec![1, 2]]));
/// assert!(!is_mtx(&vec![vec![1, 2], vec![1]]));
/// assert!(!is_mtx(&Nested::flat(vec![1, 2, 3])));
/// ```
#[must_use]
pub fn is_mtx<S: Shape + ?Sized>(x: &S) -> bool {
    matches!(x.shape_of().as_deref(), Some(&[rows, _]) if rows > 0)
}
