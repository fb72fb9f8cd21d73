//! Errors raised by rational construction, division and parsing.

use thiserror::Error;

/// Errors that can occur in rational arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator, or division by the zero rational.
    #[error("division by zero")]
    DivideByZero,

    /// Text that is not an integer, decimal or fraction.
    #[error("malformed number: {0:?}")]
    Malformed(String),

    /// A floating point value that is NaN or infinite.
    #[error("cannot convert a non-finite float to a rational")]
    NonFinite,
}
