//! Criteria direction vectors.

use crate::error::{McdaError, Result};
use crate::primitives::{Scalar, Vector};
use serde::{Deserialize, Serialize};

/// Sentinel for a criterion to minimize.
pub const MIN: i8 = -1;

/// Sentinel for a criterion to maximize.
pub const MAX: i8 = 1;

const DOMAIN: &str = "-1 (MIN) or 1 (MAX)";

/// Optimization direction of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Criterion {
    /// Lower values are preferred.
    Minimize,
    /// Higher values are preferred.
    Maximize,
}

impl Criterion {
    /// The sentinel value for this direction.
    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            Criterion::Minimize => MIN,
            Criterion::Maximize => MAX,
        }
    }

    /// Classifies a numeric sentinel, `None` if it is neither MIN nor MAX.
    #[must_use]
    pub fn from_scalar<T: Scalar>(value: T) -> Option<Self> {
        let v = value.to_f64();
        if v == f64::from(MIN) {
            Some(Criterion::Minimize)
        } else if v == f64::from(MAX) {
            Some(Criterion::Maximize)
        } else {
            None
        }
    }
}

impl From<Criterion> for i8 {
    fn from(c: Criterion) -> Self {
        c.value()
    }
}

impl TryFrom<i8> for Criterion {
    type Error = McdaError;

    fn try_from(value: i8) -> Result<Self> {
        Criterion::from_scalar(value)
            .ok_or_else(|| McdaError::value_out_of_domain(0, value, DOMAIN))
    }
}

/// Validates a criteria direction vector.
///
/// Every element must be [`MIN`] or [`MAX`]. The entire vector is checked
/// before anything is returned; on success the input comes back as a
/// [`Vector`]. An owned `Vec` or `Vector` is moved through without copying.
///
/// # Errors
///
/// Returns [`McdaError::ValueOutOfDomain`] naming the first element that is
/// neither MIN nor MAX.
///
/// # Examples
///
/// ```
/// use mcda_core::data::{criteriarr, MAX, MIN};
///
/// let criteria = criteriarr(vec![MIN, MAX, MAX]).expect("valid directions");
/// assert_eq!(criteria.as_slice(), &[-1, 1, 1]);
///
/// assert!(criteriarr(vec![MIN, MAX, 2]).is_err());
/// ```
pub fn criteriarr<T, C>(criteria: C) -> Result<Vector<T>>
where
    T: Scalar,
    C: Into<Vector<T>>,
{
    let criteria = criteria.into();
    if let Some((index, value)) = criteria
        .iter()
        .enumerate()
        .find(|&(_, v)| Criterion::from_scalar(v).is_none())
    {
        return Err(McdaError::value_out_of_domain(index, value, DOMAIN));
    }
    Ok(criteria)
}

/// Validates a criteria vector and converts it to typed directions.
///
/// # Errors
///
/// Same as [`criteriarr`].
pub fn directions<T, C>(criteria: C) -> Result<Vec<Criterion>>
where
    T: Scalar,
    C: Into<Vector<T>>,
{
    let checked = criteriarr(criteria)?;
    Ok(checked
        .iter()
        .filter_map(Criterion::from_scalar)
        .collect())
}
