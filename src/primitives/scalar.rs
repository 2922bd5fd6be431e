//! Element trait shared by `Vector` and `Matrix`.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// A numeric matrix element.
///
/// Integer and floating point types both qualify. Ratio operators widen
/// through [`Scalar::to_f64`]; shift operators stay in `Self`.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;

    /// Addition that wraps at the type's bounds instead of overflowing.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction that wraps at the type's bounds instead of overflowing.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// True if the value is strictly below zero.
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                #[allow(clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_float!(f32, f64);
