//! Shape errors for matrix construction.

use thiserror::Error;

/// Errors that can occur when building matrices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A row whose length differs from the first row's.
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Operands whose dimensions do not line up.
    #[error("shape mismatch: expected length {expected}, got {got}")]
    ShapeMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },
}
