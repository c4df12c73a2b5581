//! Exact rational number arithmetic over fixed-width signed integers.
//!
//! This library provides `Rational<T>`, a fraction `numer / denom` generic over
//! any primitive signed integer from `i8` to `i128`.
//!
//! # Features
//!
//! - **Canonical sign**: the denominator is always positive; the sign lives in
//!   the numerator
//! - **Reduced arithmetic**: every compound and binary operation stores its
//!   result in lowest terms
//! - **Explicit failure**: zero denominators and division by zero are reported
//!   as [`RatioError`] values by the `try_*` methods
//!
//! # Design Philosophy
//!
//! Construction does **not** reduce: [`Rational::new`] only rejects a zero
//! denominator and moves a negative sign onto the numerator. Call
//! [`Rational::reduce`] when lowest terms are needed. Arithmetic always
//! reduces its result exactly once.
//!
//! Overflow of `T` is not detected. Intermediate products wrap, so operands
//! must stay small enough for `T` to hold the cross products.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use fixed_ratio::Rational32;
//!
//! let a = Rational32::new(1, 2)?;
//! let b = Rational32::new(1, 3)?;
//!
//! let sum = a + b;
//! assert_eq!((sum.numer(), sum.denom()), (5, 6));
//! assert_eq!(sum.to_string(), "5/6");
//!
//! // Construction keeps the pair as given, apart from the sign
//! let r = Rational32::new(4, -8)?;
//! assert_eq!((r.numer(), r.denom()), (-4, 8));
//! # Ok::<(), fixed_ratio::RatioError>(())
//! ```
//!
//! ## Fallible Arithmetic
//!
//! ```
//! use fixed_ratio::{RatioError, Rational32};
//!
//! let mut acc = Rational32::new(3, 4)?;
//! acc.try_mul_assign(&Rational32::new(2, 3)?)?
//!     .try_sub_assign(&Rational32::new(1, 4)?)?;
//! assert_eq!(acc.to_string(), "1/4");
//!
//! let zero = Rational32::zero();
//! assert_eq!(acc.try_div(&zero), Err(RatioError::DivisionByZero));
//! # Ok::<(), RatioError>(())
//! ```

pub mod error;
pub mod ratio_trait;

pub use crate::error::RatioError;
pub use crate::ratio_trait::RatioInteger;

use core::fmt;

/// A rational number represented as numerator/denominator.
///
/// # Type Parameter
///
/// `T` must implement [`RatioInteger`], which covers the primitive signed
/// integers.
///
/// # Invariants
///
/// - Denominator is never zero
/// - Denominator is always positive; the numerator carries the sign
/// - Values are not automatically reduced on construction (call
///   [`reduce`](Rational::reduce) explicitly)
///
/// Equality and hashing compare the stored pair, so `2/4` and `1/2` are
/// different values until one of them is reduced.
///
/// # Examples
///
/// ```
/// use fixed_ratio::Rational;
///
/// let r = Rational::<i64>::new(2, 3).unwrap();
/// assert_eq!(r.numer(), 2);
/// assert_eq!(r.denom(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T: RatioInteger> {
    numer: T,
    denom: T,
}

impl<T: RatioInteger> Rational<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a rational without reduction.
    ///
    /// A negative denominator negates both parts so that the stored
    /// denominator is positive.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroDenominator`] if `denom` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::{RatioError, Rational32};
    ///
    /// let r = Rational32::new(4, -6).unwrap();
    /// assert_eq!((r.numer(), r.denom()), (-4, 6)); // Not reduced
    ///
    /// assert_eq!(Rational32::new(1, 0), Err(RatioError::ZeroDenominator));
    /// ```
    pub fn new(numer: T, denom: T) -> Result<Self, RatioError> {
        if denom == T::ZERO {
            tracing::debug!(numer = %numer, "rejected rational with zero denominator");
            return Err(RatioError::ZeroDenominator);
        }

        if denom < T::ZERO {
            return Ok(Self {
                numer: numer.wrapping_neg(),
                denom: denom.wrapping_neg(),
            });
        }

        Ok(Self { numer, denom })
    }

    /// Create a rational representing the integer `n`.
    #[inline(always)]
    pub fn from_integer(n: T) -> Self {
        Self {
            numer: n,
            denom: T::ONE,
        }
    }

    /// Create a rational representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::from_integer(T::ZERO)
    }

    /// Create a rational representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self::from_integer(T::ONE)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The stored numerator.
    #[inline(always)]
    pub fn numer(&self) -> T {
        self.numer
    }

    /// The stored denominator, always positive.
    #[inline(always)]
    pub fn denom(&self) -> T {
        self.denom
    }

    /// Check if the rational is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer == T::ZERO
    }

    /// Check if the rational is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer > T::ZERO
    }

    /// Check if the rational is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer < T::ZERO
    }

    /// Check if the stored denominator is 1.
    ///
    /// An unreduced integer such as `4/2` reports `false`.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::ONE
    }

    // ========================================================================
    // BASIC OPERATIONS
    // ========================================================================

    /// Get the reciprocal (1/x) without reduction. `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroDenominator`] if `self` is zero.
    #[inline]
    pub fn recip(&self) -> Result<Self, RatioError> {
        Self::new(self.denom, self.numer)
    }

    /// Negate the rational, flipping the sign of the numerator.
    #[allow(clippy::should_implement_trait)] // We do implement Neg trait, clippy doesn't detect it
    #[inline(always)]
    pub fn neg(self) -> Self {
        Self {
            numer: self.numer.wrapping_neg(),
            denom: self.denom,
        }
    }

    // ========================================================================
    // REDUCTION
    // ========================================================================

    /// Reduce the rational to lowest terms in place.
    ///
    /// Zero becomes `0/1`; any other value is divided through by the
    /// non-negative gcd of its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::Rational32;
    ///
    /// let mut r = Rational32::new(-6, 8).unwrap();
    /// r.reduce();
    /// assert_eq!((r.numer(), r.denom()), (-3, 4));
    ///
    /// let mut z = Rational32::new(0, 5).unwrap();
    /// z.reduce();
    /// assert_eq!((z.numer(), z.denom()), (0, 1));
    /// ```
    pub fn reduce(&mut self) {
        if self.numer == T::ZERO && self.denom != T::ONE {
            self.denom = T::ONE;
            return;
        }

        let g = self.numer.gcd(&self.denom);
        if g == T::ONE {
            return;
        }

        self.numer = self.numer / g;
        self.denom = self.denom / g;
    }

    /// Return a reduced copy, leaving `self` unchanged.
    #[inline]
    pub fn reduced(&self) -> Self {
        let mut r = *self;
        r.reduce();
        r
    }

    // ========================================================================
    // ARITHMETIC - IN PLACE
    // ========================================================================

    /// Add `other` to `self` in place and reduce the result.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroDenominator`] only if the denominator product
    /// overflowed to zero.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<&mut Self, RatioError> {
        let numer = self
            .numer
            .wrapping_mul(&other.denom)
            .wrapping_add(&other.numer.wrapping_mul(&self.denom));
        let denom = self.denom.wrapping_mul(&other.denom);
        self.assign_reduced(numer, denom)
    }

    /// Subtract `other` from `self` in place and reduce the result.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroDenominator`] only if the denominator product
    /// overflowed to zero.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<&mut Self, RatioError> {
        let numer = self
            .numer
            .wrapping_mul(&other.denom)
            .wrapping_sub(&other.numer.wrapping_mul(&self.denom));
        let denom = self.denom.wrapping_mul(&other.denom);
        self.assign_reduced(numer, denom)
    }

    /// Multiply `self` by `other` in place and reduce the result.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroDenominator`] only if the denominator product
    /// overflowed to zero.
    pub fn try_mul_assign(&mut self, other: &Self) -> Result<&mut Self, RatioError> {
        let numer = self.numer.wrapping_mul(&other.numer);
        let denom = self.denom.wrapping_mul(&other.denom);
        self.assign_reduced(numer, denom)
    }

    /// Divide `self` by `other` in place and reduce the result.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::DivisionByZero`] if `other` is zero. `self` is
    /// not modified in that case.
    pub fn try_div_assign(&mut self, other: &Self) -> Result<&mut Self, RatioError> {
        if other.numer == T::ZERO {
            tracing::debug!(
                numer = %self.numer,
                denom = %self.denom,
                "rejected division by zero"
            );
            return Err(RatioError::DivisionByZero);
        }

        let numer = self.numer.wrapping_mul(&other.denom);
        let denom = self.denom.wrapping_mul(&other.numer);
        self.assign_reduced(numer, denom)
    }

    /// Rebuild from an unreduced pair, reduce, and store into `self`.
    #[inline]
    fn assign_reduced(&mut self, numer: T, denom: T) -> Result<&mut Self, RatioError> {
        let mut result = Self::new(numer, denom)?;
        result.reduce();
        *self = result;
        Ok(self)
    }

    // ========================================================================
    // ARITHMETIC - BINARY
    // ========================================================================

    /// Add two rationals, returning a reduced result.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::Rational32;
    ///
    /// let a = Rational32::new(1, 6).unwrap();
    /// let b = Rational32::new(1, 3).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap().to_string(), "1/2");
    /// ```
    #[inline]
    pub fn try_add(&self, other: &Self) -> Result<Self, RatioError> {
        let mut result = *self;
        result.try_add_assign(other)?;
        Ok(result)
    }

    /// Subtract `other` from `self`, returning a reduced result.
    #[inline]
    pub fn try_sub(&self, other: &Self) -> Result<Self, RatioError> {
        let mut result = *self;
        result.try_sub_assign(other)?;
        Ok(result)
    }

    /// Multiply two rationals, returning a reduced result.
    #[inline]
    pub fn try_mul(&self, other: &Self) -> Result<Self, RatioError> {
        let mut result = *self;
        result.try_mul_assign(other)?;
        Ok(result)
    }

    /// Divide `self` by `other`, returning a reduced result.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::DivisionByZero`] if `other` is zero.
    #[inline]
    pub fn try_div(&self, other: &Self) -> Result<Self, RatioError> {
        let mut result = *self;
        result.try_div_assign(other)?;
        Ok(result)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Operator traits cannot return `Result`; fail the same way integer
/// division by zero does.
#[cold]
#[inline(never)]
fn arithmetic_failure(err: RatioError) -> ! {
    panic!("{err}")
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Implements a binary operator and its compound form, for owned and
/// borrowed operands, on top of the matching `try_*` methods.
macro_rules! impl_arith_op {
    ($Op:ident, $op:ident, $try_op:ident, $OpAssign:ident, $op_assign:ident, $try_op_assign:ident) => {
        impl<T: RatioInteger> $Op for Rational<T> {
            type Output = Self;
            #[inline]
            fn $op(self, other: Self) -> Self {
                self.$try_op(&other)
                    .unwrap_or_else(|err| arithmetic_failure(err))
            }
        }

        impl<T: RatioInteger> $Op for &Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $op(self, other: Self) -> Rational<T> {
                self.$try_op(other)
                    .unwrap_or_else(|err| arithmetic_failure(err))
            }
        }

        impl<T: RatioInteger> $OpAssign for Rational<T> {
            #[inline]
            fn $op_assign(&mut self, other: Self) {
                if let Err(err) = self.$try_op_assign(&other) {
                    arithmetic_failure(err);
                }
            }
        }

        impl<T: RatioInteger> $OpAssign<&Rational<T>> for Rational<T> {
            #[inline]
            fn $op_assign(&mut self, other: &Rational<T>) {
                if let Err(err) = self.$try_op_assign(other) {
                    arithmetic_failure(err);
                }
            }
        }
    };
}

impl_arith_op!(Add, add, try_add, AddAssign, add_assign, try_add_assign);
impl_arith_op!(Sub, sub, try_sub, SubAssign, sub_assign, try_sub_assign);
impl_arith_op!(Mul, mul, try_mul, MulAssign, mul_assign, try_mul_assign);
impl_arith_op!(Div, div, try_div, DivAssign, div_assign, try_div_assign);

impl<T: RatioInteger> Neg for Rational<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Rational::neg(self)
    }
}

impl<T: RatioInteger> Default for Rational<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInteger> From<T> for Rational<T> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

/// Renders `numer` alone when the denominator is 1, otherwise `numer/denom`.
impl<T: RatioInteger> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == T::ONE {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Rational using 8-bit integers.
pub type Rational8 = Rational<i8>;

/// Rational using 16-bit integers.
pub type Rational16 = Rational<i16>;

/// Rational using 32-bit integers (the C `int` width).
pub type Rational32 = Rational<i32>;

/// Rational using 64-bit integers.
pub type Rational64 = Rational<i64>;

/// Rational using 128-bit integers.
pub type Rational128 = Rational<i128>;

/// Rational using pointer-sized integers.
pub type RationalIsize = Rational<isize>;

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;

    fn r(numer: i32, denom: i32) -> Rational32 {
        Rational32::new(numer, denom).unwrap()
    }

    fn parts(x: Rational32) -> (i32, i32) {
        (x.numer(), x.denom())
    }

    #[test]
    fn test_default_is_zero_over_one() {
        assert_eq!(parts(Rational32::default()), (0, 1));
        assert_eq!(Rational32::default(), Rational32::zero());
    }

    #[test]
    fn test_new_keeps_pair_unreduced() {
        assert_eq!(parts(r(4, 8)), (4, 8));
    }

    #[test]
    fn test_new_moves_sign_to_numerator() {
        assert_eq!(parts(r(3, -4)), (-3, 4));
        assert_eq!(parts(r(-3, -4)), (3, 4));
        assert_eq!(r(5, -7), r(-5, 7));
    }

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert_eq!(Rational32::new(1, 0), Err(RatioError::ZeroDenominator));
        assert_eq!(Rational32::new(0, 0), Err(RatioError::ZeroDenominator));
        assert_eq!(Rational64::new(-9, 0), Err(RatioError::ZeroDenominator));
    }

    #[test]
    fn test_predicates() {
        assert!(r(0, 3).is_zero());
        assert!(r(-1, 3).is_negative());
        assert!(r(1, -3).is_negative());
        assert!(r(-1, -3).is_positive());
        assert!(r(7, 1).is_integer());
        assert!(!r(4, 2).is_integer());
    }

    #[test]
    fn test_recip_swaps_without_reducing() {
        let x = r(2, 6);
        assert_eq!(parts(x.recip().unwrap()), (6, 2));
        // receiver untouched
        assert_eq!(parts(x), (2, 6));
    }

    #[test]
    fn test_recip_normalizes_sign() {
        assert_eq!(parts(r(-2, 3).recip().unwrap()), (-3, 2));
    }

    #[test]
    fn test_recip_of_zero_fails() {
        assert_eq!(r(0, 5).recip(), Err(RatioError::ZeroDenominator));
    }

    #[test]
    fn test_reduce() {
        let mut x = r(6, 8);
        x.reduce();
        assert_eq!(parts(x), (3, 4));

        let mut y = r(-10, 4);
        y.reduce();
        assert_eq!(parts(y), (-5, 2));

        let mut z = r(0, 5);
        z.reduce();
        assert_eq!(parts(z), (0, 1));

        let mut w = r(0, -9);
        w.reduce();
        assert_eq!(parts(w), (0, 1));
    }

    #[test]
    fn test_reduce_preserves_value_and_is_coprime() {
        for n in -30..=30 {
            for d in 1..=30 {
                let x = r(n, d).reduced();
                if n == 0 {
                    assert_eq!(parts(x), (0, 1));
                    continue;
                }
                assert_eq!(x.numer().gcd(&x.denom()), 1, "{n}/{d}");
                assert!(x.denom() > 0);
                // n/d == x.numer/x.denom
                assert_eq!(n * x.denom(), x.numer() * d, "{n}/{d}");
            }
        }
    }

    #[test]
    fn test_reduced_leaves_receiver() {
        let x = r(9, 12);
        assert_eq!(parts(x.reduced()), (3, 4));
        assert_eq!(parts(x), (9, 12));
    }

    #[test]
    fn test_end_to_end_examples() {
        assert_eq!(parts(r(1, 2) + r(1, 3)), (5, 6));
        assert_eq!(parts(r(2, 4) * r(2, 3)), (1, 3));
        assert_eq!(parts(r(1, 2) / r(2, 1)), (1, 4));
        assert_eq!(parts(r(1, 2) - r(1, 2)), (0, 1));
    }

    #[test]
    fn test_compound_ops_reduce_in_place() {
        let mut x = r(1, 4);
        x += r(1, 4);
        assert_eq!(parts(x), (1, 2));

        x -= r(3, 2);
        assert_eq!(parts(x), (-1, 1));

        x *= r(-4, 6);
        assert_eq!(parts(x), (2, 3));

        x /= r(-4, 3);
        assert_eq!(parts(x), (-1, 2));
    }

    #[test]
    fn test_compound_ops_chain() {
        let mut x = r(1, 2);
        x.try_add_assign(&r(1, 2))
            .unwrap()
            .try_mul_assign(&r(3, 5))
            .unwrap()
            .try_div_assign(&r(9, 10))
            .unwrap();
        assert_eq!(parts(x), (2, 3));
    }

    #[test]
    fn test_div_by_negative_normalizes_sign() {
        assert_eq!(parts(r(1, 2) / r(-3, 4)), (-2, 3));
    }

    #[test]
    fn test_div_by_zero_fails() {
        let a = r(3, 7);
        for d in 1..5 {
            assert_eq!(a.try_div(&r(0, d)), Err(RatioError::DivisionByZero));
        }
        assert_eq!(
            Rational32::zero().try_div(&Rational32::zero()),
            Err(RatioError::DivisionByZero)
        );
    }

    #[test]
    fn test_failed_div_assign_leaves_receiver() {
        let mut x = r(3, 7);
        assert_eq!(
            x.try_div_assign(&Rational32::zero()).err(),
            Some(RatioError::DivisionByZero)
        );
        assert_eq!(parts(x), (3, 7));
    }

    #[test]
    #[should_panic(expected = "cannot divide by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = r(1, 2) / Rational32::zero();
    }

    #[test]
    #[should_panic(expected = "cannot divide by zero")]
    fn test_div_assign_operator_panics_on_zero() {
        let mut x = r(1, 2);
        x /= &r(0, 3);
    }

    #[test]
    fn test_binary_ops_do_not_mutate_operands() {
        let a = r(2, 4);
        let b = r(3, 9);
        let _ = &a + &b;
        let _ = &a * &b;
        let _ = a.try_div(&b).unwrap();
        assert_eq!(parts(a), (2, 4));
        assert_eq!(parts(b), (3, 9));
    }

    #[test]
    fn test_identity_laws() {
        for (n, d) in [(3, 4), (-5, 6), (10, 4), (0, 7), (7, -2)] {
            let a = r(n, d);
            assert_eq!(a + Rational32::zero(), a.reduced());
            assert_eq!(a * Rational32::one(), a.reduced());
            if !a.is_zero() {
                assert_eq!(a * a.recip().unwrap(), r(1, 1));
                assert_eq!(a / a, Rational32::one());
            }
        }
    }

    #[test]
    fn test_commutativity() {
        let values = [r(1, 2), r(-2, 3), r(5, 10), r(0, 4), r(7, -3)];
        for a in values {
            for b in values {
                assert_eq!(a + b, b + a);
                assert_eq!(a * b, b * a);
            }
        }
    }

    #[test]
    fn test_neg() {
        assert_eq!(parts(-r(3, 4)), (-3, 4));
        assert_eq!(parts(-r(-3, 4)), (3, 4));
        assert_eq!(parts(-Rational32::zero()), (0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(r(3, 1).to_string(), "3");
        assert_eq!(r(-5, 1).to_string(), "-5");
        assert_eq!(r(3, 4).to_string(), "3/4");
        assert_eq!(r(3, -4).to_string(), "-3/4");
        assert_eq!(r(-3, -4).to_string(), "3/4");
        // unreduced pairs render as stored
        assert_eq!(r(4, 8).to_string(), "4/8");
        assert_eq!(r(0, 5).to_string(), "0/5");
        assert_eq!(Rational32::zero().to_string(), "0");
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(parts(Rational32::from(-8)), (-8, 1));
        assert_eq!(Rational::<i128>::from_integer(5).to_string(), "5");
    }

    #[test]
    fn test_other_widths() {
        let a = Rational8::new(1, 4).unwrap();
        let b = Rational8::new(1, 4).unwrap();
        assert_eq!((a + b).to_string(), "1/2");

        let c = Rational128::new(-1, 3).unwrap();
        let d = Rational128::new(1, 6).unwrap();
        assert_eq!((c - d).to_string(), "-1/2");

        let e = RationalIsize::new(2, -3).unwrap();
        assert_eq!((e / e).to_string(), "1");
    }
}
