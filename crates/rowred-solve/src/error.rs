//! Errors raised by the elimination engine.

use rowred_linalg::LinalgError;
use rowred_rational::RationalError;
use thiserror::Error;

/// Errors that can occur while solving a system.
///
/// A failed solve never yields a partial result: half an elimination has
/// no mathematical meaning.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The coefficient matrix has no rows.
    #[error("coefficient matrix is empty")]
    Empty,

    /// The coefficient matrix is not square.
    #[error("coefficient matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The right-hand side does not have one entry per equation.
    #[error("right-hand side has {got} entries, expected {expected}")]
    ShapeMismatch {
        /// Number of equations
        expected: usize,
        /// Length of the right-hand side
        got: usize,
    },

    /// Rational arithmetic failed, for example a zero denominator in a cell.
    #[error("arithmetic failed: {0}")]
    Arithmetic(#[from] RationalError),

    /// The input grid could not be assembled into a matrix.
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// Solution extraction was handed a matrix that is not in row-echelon form.
    #[error("row {row} is not in row-echelon form")]
    NotEchelon {
        /// Zero-based row index
        row: usize,
    },

    /// Replaying a trace produced a matrix different from the recorded one.
    #[error("step {step} does not reproduce its recorded matrix")]
    ReplayMismatch {
        /// Zero-based step index
        step: usize,
    },

    /// A trace with no initial snapshot cannot be replayed.
    #[error("trace has no initial step")]
    EmptyTrace,
}
