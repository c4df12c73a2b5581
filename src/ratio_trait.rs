//! Integer abstraction for generic rational arithmetic over fixed-width
//! signed primitives.
//!
//! [`RatioInteger`] is the bound on the component type of
//! [`Rational<T>`](crate::Rational). It builds on [`num_integer::Integer`],
//! which supplies division, remainder and a non-negative `gcd`, and adds the
//! constants and wrapping operations the arithmetic needs.
//!
//! Overflow is not detected: every product and sum in `Rational<T>` goes
//! through the `wrapping_*` operations below, so arithmetic on operands that
//! are too large for `T` produces a wrapped, meaningless value instead of
//! a panic.
//!
//! # Example
//!
//! ```
//! use fixed_ratio::RatioInteger;
//!
//! assert_eq!(<i32 as RatioInteger>::wrapping_mul(&i32::MAX, &2), -2);
//! assert_eq!(<i64 as RatioInteger>::ONE, 1);
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;
use num_integer::Integer;

/// Signed integer type suitable for use in `Rational<T>`.
///
/// # Implemented Types
///
/// `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait RatioInteger: Integer + Copy + Debug + Display + Hash + Send + Sync + 'static {
    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// Add with wrapping on overflow.
    fn wrapping_add(&self, other: &Self) -> Self;

    /// Subtract with wrapping on overflow.
    fn wrapping_sub(&self, other: &Self) -> Self;

    /// Multiply with wrapping on overflow.
    fn wrapping_mul(&self, other: &Self) -> Self;

    /// Negate with wrapping; `MIN` maps to itself.
    fn wrapping_neg(&self) -> Self;
}

/// Macro to implement RatioInteger for a primitive signed integer.
macro_rules! impl_ratio_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl RatioInteger for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                // Fully qualified: method syntax would pick the trait method
                // (it takes `&self`) over the by-value inherent one.
                #[inline(always)]
                fn wrapping_add(&self, other: &Self) -> Self {
                    <$type>::wrapping_add(*self, *other)
                }

                #[inline(always)]
                fn wrapping_sub(&self, other: &Self) -> Self {
                    <$type>::wrapping_sub(*self, *other)
                }

                #[inline(always)]
                fn wrapping_mul(&self, other: &Self) -> Self {
                    <$type>::wrapping_mul(*self, *other)
                }

                #[inline(always)]
                fn wrapping_neg(&self) -> Self {
                    <$type>::wrapping_neg(*self)
                }
            }
        )*
    };
}

impl_ratio_integer!(i8, i16, i32, i64, i128, isize);
