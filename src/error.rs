use thiserror::Error;

/// Errors raised by fallible `Rational` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatioError {
    /// A value would have been built with a zero denominator, either from
    /// explicit arguments or from the reciprocal of zero.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// The divisor of a division has a zero numerator.
    #[error("cannot divide by zero")]
    DivisionByZero,
}
