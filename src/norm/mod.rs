//! Normalization operators for decision matrices.
//!
//! Every operator rescales or shifts a matrix by a summary statistic
//! computed over an *axis slice*: the whole matrix (`axis = None`), each row
//! (`Some(Axis::Rows)`) or each column (`Some(Axis::Columns)`). The output
//! always has the input's shape and the input is never modified.
//!
//! | Operator | Denominator / shift | Output element |
//! |---|---|---|
//! | [`sum`] | slice sum | `f64` |
//! | [`max`] | slice maximum | `f64` |
//! | [`vector`] | slice L2 norm | `f64` |
//! | [`push_negatives`] | slice minimum, if negative | input type |
//! | [`add1to0`] | +1 where the slice holds a zero | input type |
//!
//! The operators are meant to be called through the module path
//! (`norm::sum`, `norm::max`) so they don't shadow the iterator methods of
//! the same name.
//!
//! # Zero denominators
//!
//! The ratio operators do **not** guard against a zero denominator. An
//! all-zero slice under [`sum`] or [`vector`], or a zero maximum under
//! [`max`], produces `NaN` or `±inf` following IEEE-754. A `debug` event is
//! logged when this happens; the values are left as computed.
//!
//! # Example
//!
//! ```
//! use mcda_core::norm::{self, Axis};
//! use mcda_core::primitives::Matrix;
//!
//! let mtx = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid matrix dimensions");
//!
//! // ratios with the sum of each column
//! let by_col = norm::sum(&mtx, Some(Axis::Columns));
//! assert!((by_col.get(0, 0) - 0.25).abs() < 1e-12);
//! assert!((by_col.get(1, 0) - 0.75).abs() < 1e-12);
//! ```

mod method;

pub use method::{NormMethod, Normalizer};

use crate::error::McdaError;
use crate::primitives::{Matrix, Scalar};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Direction along which slices are taken.
///
/// `Rows` applies the operator to each row independently, `Columns` to each
/// column. Use `None` in place of an `Axis` to treat the matrix as one flat
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// One slice per row (alternative).
    Rows,
    /// One slice per column (criterion).
    Columns,
}

/// Array-library axis indices: `0` reduces down the rows (one result per
/// column), `1` reduces across the columns (one result per row).
impl TryFrom<usize> for Axis {
    type Error = McdaError;

    fn try_from(axis: usize) -> Result<Self, Self::Error> {
        match axis {
            0 => Ok(Axis::Columns),
            1 => Ok(Axis::Rows),
            _ => Err(McdaError::InvalidAxis { axis }),
        }
    }
}

/// A reduction result that broadcasts back against the source shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reduced<R> {
    Whole(R),
    PerRow(Vec<R>),
    PerColumn(Vec<R>),
}

impl<R: Copy> Reduced<R> {
    /// Value of the slice that element `(i, j)` belongs to.
    pub(crate) fn at(&self, i: usize, j: usize) -> R {
        match self {
            Reduced::Whole(v) => *v,
            Reduced::PerRow(vs) => vs[i],
            Reduced::PerColumn(vs) => vs[j],
        }
    }

    pub(crate) fn map<U, F: Fn(R) -> U>(&self, f: F) -> Reduced<U> {
        match self {
            Reduced::Whole(v) => Reduced::Whole(f(*v)),
            Reduced::PerRow(vs) => Reduced::PerRow(vs.iter().map(|&v| f(v)).collect()),
            Reduced::PerColumn(vs) => Reduced::PerColumn(vs.iter().map(|&v| f(v)).collect()),
        }
    }

    pub(crate) fn any<F: Fn(R) -> bool>(&self, pred: F) -> bool {
        match self {
            Reduced::Whole(v) => pred(*v),
            Reduced::PerRow(vs) | Reduced::PerColumn(vs) => vs.iter().any(|&v| pred(v)),
        }
    }
}

/// Folds every axis slice of `mtx` starting from `init`.
///
/// Slices of an empty matrix keep `init`; callers never read them because
/// the output has no elements either.
pub(crate) fn reduce<T, R, F>(mtx: &Matrix<T>, axis: Option<Axis>, init: R, fold: F) -> Reduced<R>
where
    T: Copy,
    R: Copy,
    F: Fn(R, T) -> R,
{
    let (rows, cols) = mtx.shape();
    let data = mtx.as_slice();

    match axis {
        None => Reduced::Whole(data.iter().fold(init, |acc, &v| fold(acc, v))),
        Some(Axis::Rows) => {
            let per_row = (0..rows)
                .map(|i| {
                    data[i * cols..(i + 1) * cols]
                        .iter()
                        .fold(init, |acc, &v| fold(acc, v))
                })
                .collect();
            Reduced::PerRow(per_row)
        }
        Some(Axis::Columns) => {
            let mut per_col = vec![init; cols];
            for row in data.chunks(cols.max(1)) {
                for (acc, &v) in per_col.iter_mut().zip(row) {
                    *acc = fold(*acc, v);
                }
            }
            Reduced::PerColumn(per_col)
        }
    }
}

fn divide_by(
    x: &Matrix<f64>,
    denom: &Reduced<f64>,
    operator: &'static str,
    axis: Option<Axis>,
) -> Matrix<f64> {
    if !x.is_empty() && denom.any(|d| d == 0.0) {
        debug!(operator, ?axis, "zero denominator, result holds NaN/inf");
    }
    x.map_indexed(|i, j, v| v / denom.at(i, j))
}

/// NaN-propagating maximum.
fn max_fold(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else if v > acc {
        v
    } else {
        acc
    }
}

/// NaN-propagating minimum over any ordered element type.
fn min_fold<T: Scalar>(acc: Option<T>, v: T) -> Option<T> {
    let Some(current) = acc else {
        return Some(v);
    };
    match v.partial_cmp(&current) {
        Some(Ordering::Less) => Some(v),
        Some(_) => Some(current),
        // one side is NaN: keep whichever one it is
        None if current.partial_cmp(&current).is_none() => Some(current),
        None => Some(v),
    }
}

/// Divides every value by the sum of its axis slice.
///
/// Used by AHP, weighted sum and weighted product. The input is widened to
/// `f64` first. A slice summing to zero yields `NaN`/`inf`.
///
/// ```
/// use mcda_core::norm::{self, Axis};
/// use mcda_core::primitives::Matrix;
///
/// let mtx = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid");
/// let whole = norm::sum(&mtx, None);
/// assert!((whole.get(1, 1) - 0.4).abs() < 1e-12);
///
/// let by_row = norm::sum(&mtx, Some(Axis::Rows));
/// assert!((by_row.get(1, 0) - 3.0 / 7.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn sum<T: Scalar>(mtx: &Matrix<T>, axis: Option<Axis>) -> Matrix<f64> {
    let x = mtx.to_f64();
    let totals = reduce(&x, axis, 0.0, |acc, v| acc + v);
    divide_by(&x, &totals, "sum", axis)
}

/// Divides every value by the maximum of its axis slice.
///
/// The input is widened to `f64` first. `NaN` in a slice propagates to the
/// whole slice.
///
/// ```
/// use mcda_core::norm::{self, Axis};
/// use mcda_core::primitives::Matrix;
///
/// let mtx = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid");
/// let by_col = norm::max(&mtx, Some(Axis::Columns));
/// assert!((by_col.get(0, 1) - 0.5).abs() < 1e-12);
/// assert!((by_col.get(1, 1) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn max<T: Scalar>(mtx: &Matrix<T>, axis: Option<Axis>) -> Matrix<f64> {
    let x = mtx.to_f64();
    let maxima = reduce(&x, axis, f64::NEG_INFINITY, max_fold);
    divide_by(&x, &maxima, "max", axis)
}

/// Divides every value by the Euclidean norm of its axis slice.
///
/// This is the ratio used by MOORA. With `axis = None` the norm is the
/// Frobenius norm of the whole matrix. An all-zero slice yields `NaN`.
///
/// ```
/// use mcda_core::norm::{self, Axis};
/// use mcda_core::primitives::Matrix;
///
/// let mtx = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
/// let by_row = norm::vector(&mtx, Some(Axis::Rows));
/// assert!((by_row.get(1, 0) - 0.6).abs() < 1e-12);
/// assert!((by_row.get(1, 1) - 0.8).abs() < 1e-12);
/// ```
#[must_use]
pub fn vector<T: Scalar>(mtx: &Matrix<T>, axis: Option<Axis>) -> Matrix<f64> {
    let x = mtx.to_f64();
    let norms = reduce(&x, axis, 0.0, |acc, v| acc + v * v).map(f64::sqrt);
    divide_by(&x, &norms, "vector", axis)
}

/// Shifts every slice whose minimum is negative so that its minimum becomes
/// zero. Slices without negative values are returned untouched.
///
/// The element type is preserved: integer input stays integer. A shift past
/// the type's bounds wraps around.
///
/// ```
/// use mcda_core::norm::{self, Axis};
/// use mcda_core::primitives::Matrix;
///
/// let mtx = Matrix::from_vec(2, 2, vec![-1, 2, 3, 4]).expect("valid");
/// assert_eq!(norm::push_negatives(&mtx, None).as_slice(), &[0, 3, 4, 5]);
/// assert_eq!(norm::push_negatives(&mtx, Some(Axis::Columns)).as_slice(), &[0, 2, 4, 4]);
/// assert_eq!(norm::push_negatives(&mtx, Some(Axis::Rows)).as_slice(), &[0, 3, 3, 4]);
/// ```
#[must_use]
pub fn push_negatives<T: Scalar>(mtx: &Matrix<T>, axis: Option<Axis>) -> Matrix<T> {
    let deltas = reduce(mtx, axis, None, min_fold).map(|min| match min {
        Some(m) if m.is_negative() => m,
        _ => T::ZERO,
    });

    if !deltas.any(|d| d != T::ZERO) {
        return mtx.clone();
    }
    mtx.map_indexed(|i, j, v| v.wrapping_sub(deltas.at(i, j)))
}

/// Adds one to every slice holding a zero.
///
/// If the matrix has no zero at all it is returned unchanged. With
/// `axis = None` a single zero anywhere increments the whole matrix. A
/// one-dimensional input is handled as a one-row matrix with `axis = None`.
/// The element type is preserved; the maximum of an integer type wraps to
/// its minimum.
///
/// ```
/// use mcda_core::norm;
/// use mcda_core::primitives::Matrix;
///
/// let mtx = Matrix::from_vec(2, 2, vec![0, 1, 2, 3]).expect("valid");
/// assert_eq!(norm::add1to0(&mtx, None).as_slice(), &[1, 2, 3, 4]);
/// ```
#[must_use]
pub fn add1to0<T: Scalar>(mtx: &Matrix<T>, axis: Option<Axis>) -> Matrix<T> {
    if !mtx.contains_zero() {
        return mtx.clone();
    }

    match axis {
        None => mtx.map_indexed(|_, _, v| v.wrapping_add(T::ONE)),
        Some(_) => {
            let has_zero = reduce(mtx, axis, false, |acc, v| acc || v == T::ZERO);
            mtx.map_indexed(|i, j, v| {
                if has_zero.at(i, j) {
                    v.wrapping_add(T::ONE)
                } else {
                    v
                }
            })
        }
    }
}


#[cfg(test)]
mod tests_normalization_contract;
