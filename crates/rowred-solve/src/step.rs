//! Row operations and the elimination trace.
//!
//! The engine never mutates its working matrix directly: it builds a
//! [`RowOp`], applies it, and records the result. A trace can therefore be
//! replayed from its first snapshot and checked step by step.

use std::fmt;

use num_traits::Zero;
use rowred_linalg::DenseMatrix;
use rowred_rational::{Rational, RationalError};

use crate::SolveError;

/// An elementary row operation, or a marker between phases.
///
/// Row indices are zero-based; descriptions print them one-based.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RowOp {
    /// The freshly built augmented matrix.
    Initial,
    /// `R_first ↔ R_second`.
    Swap {
        /// Destination of the pivot row
        first: usize,
        /// Row the pivot was found in
        second: usize,
    },
    /// `R_target → R_target - factor · R_source`.
    Eliminate {
        /// Row being updated
        target: usize,
        /// Pivot row
        source: usize,
        /// Multiple of the pivot row subtracted
        factor: Rational,
    },
    /// Start of the reduction to normal form.
    BeginReduction,
    /// `R_row → (1/pivot) · R_row`.
    Normalize {
        /// Row being scaled
        row: usize,
        /// Pivot value divided out
        pivot: Rational,
    },
}

impl RowOp {
    /// Applies this operation to `matrix` in place.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] when normalizing by a zero
    /// pivot.
    ///
    /// # Panics
    ///
    /// Panics if a row index is out of range for `matrix`.
    pub fn apply(&self, matrix: &mut DenseMatrix<Rational>) -> Result<(), RationalError> {
        match self {
            RowOp::Initial | RowOp::BeginReduction => {}
            RowOp::Swap { first, second } => matrix.swap_rows(*first, *second),
            RowOp::Eliminate {
                target,
                source,
                factor,
            } => {
                for col in 0..matrix.num_cols() {
                    let delta = factor * &matrix[(*source, col)];
                    if !delta.is_zero() {
                        matrix[(*target, col)] = &matrix[(*target, col)] - &delta;
                    }
                }
            }
            RowOp::Normalize { row, pivot } => {
                for entry in matrix.row_mut(*row) {
                    *entry = entry.checked_div(pivot)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for RowOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOp::Initial => write!(f, "Initial Augmented Matrix [A|b]"),
            RowOp::Swap { first, second } => write!(f, "Swap R{} ↔ R{}", first + 1, second + 1),
            RowOp::Eliminate {
                target,
                source,
                factor,
            } => write!(
                f,
                "R{t} → R{t} - ({factor})R{s}",
                t = target + 1,
                s = source + 1
            ),
            RowOp::BeginReduction => write!(f, "Beginning reduction to RREF..."),
            RowOp::Normalize { row, pivot } => {
                write!(f, "R{r} → (1/{pivot})R{r} (Normalize pivot)", r = row + 1)
            }
        }
    }
}

/// One entry of the elimination transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolverStep {
    /// The operation that produced `matrix`.
    pub op: RowOp,
    /// Human-readable form of `op`.
    pub description: String,
    /// Deep copy of the working matrix after the operation.
    pub matrix: DenseMatrix<Rational>,
    /// Row to draw attention to, if any.
    pub highlight_row: Option<usize>,
    /// Pivot column involved, if any.
    pub highlight_col: Option<usize>,
}

/// Append-only list of [`SolverStep`]s.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    steps: Vec<SolverStep>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `op` to `matrix` and records a snapshot of the result.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures from [`RowOp::apply`]; nothing is
    /// recorded in that case.
    pub fn perform(
        &mut self,
        op: RowOp,
        matrix: &mut DenseMatrix<Rational>,
        highlight_row: Option<usize>,
        highlight_col: Option<usize>,
    ) -> Result<(), RationalError> {
        op.apply(matrix)?;
        log::trace!("{op}");
        self.steps.push(SolverStep {
            description: op.to_string(),
            op,
            matrix: matrix.clone(),
            highlight_row,
            highlight_col,
        });
        Ok(())
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[SolverStep] {
        &self.steps
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the trace, returning its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<SolverStep> {
        self.steps
    }
}

/// Re-executes a transcript from its first snapshot.
///
/// Every operation is applied to a fresh copy of the first step's matrix and
/// the result is compared against the snapshot stored with that step.
///
/// # Errors
///
/// Returns [`SolveError::EmptyTrace`] for an empty slice,
/// [`SolveError::ReplayMismatch`] at the first step whose snapshot differs,
/// and arithmetic errors from the operations themselves.
pub fn replay(steps: &[SolverStep]) -> Result<DenseMatrix<Rational>, SolveError> {
    let (first, rest) = steps.split_first().ok_or(SolveError::EmptyTrace)?;
    let mut matrix = first.matrix.clone();
    for (i, step) in rest.iter().enumerate() {
        step.op.apply(&mut matrix)?;
        if matrix != step.matrix {
            return Err(SolveError::ReplayMismatch { step: i + 1 });
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    fn grid(rows: &[&[i64]]) -> DenseMatrix<Rational> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| Rational::from(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(RowOp::Initial.to_string(), "Initial Augmented Matrix [A|b]");
        assert_eq!(
            RowOp::Swap { first: 0, second: 2 }.to_string(),
            "Swap R1 ↔ R3"
        );
        assert_eq!(
            RowOp::Eliminate {
                target: 1,
                source: 0,
                factor: q(-3, 2)
            }
            .to_string(),
            "R2 → R2 - (-3/2)R1"
        );
        assert_eq!(
            RowOp::BeginReduction.to_string(),
            "Beginning reduction to RREF..."
        );
        assert_eq!(
            RowOp::Normalize { row: 0, pivot: q(2, 1) }.to_string(),
            "R1 → (1/2)R1 (Normalize pivot)"
        );
    }

    #[test]
    fn test_apply_eliminate() {
        let mut m = grid(&[&[2, 4, 6], &[1, 3, 5]]);
        RowOp::Eliminate {
            target: 1,
            source: 0,
            factor: q(1, 2),
        }
        .apply(&mut m)
        .unwrap();
        assert_eq!(m, grid(&[&[2, 4, 6], &[0, 1, 2]]));
    }

    #[test]
    fn test_apply_normalize() {
        let mut m = grid(&[&[2, 3, 4]]);
        RowOp::Normalize { row: 0, pivot: q(2, 1) }.apply(&mut m).unwrap();
        assert_eq!(m.row(0), &[q(1, 1), q(3, 2), q(2, 1)]);

        let err = RowOp::Normalize {
            row: 0,
            pivot: Rational::zero(),
        }
        .apply(&mut m);
        assert_eq!(err, Err(RationalError::DivideByZero));
    }

    #[test]
    fn test_perform_snapshots_are_independent() {
        let mut m = grid(&[&[0, 1], &[1, 0]]);
        let mut trace = Trace::new();
        trace.perform(RowOp::Initial, &mut m, None, None).unwrap();
        trace
            .perform(RowOp::Swap { first: 0, second: 1 }, &mut m, Some(0), None)
            .unwrap();

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.steps()[0].matrix, grid(&[&[0, 1], &[1, 0]]));
        assert_eq!(trace.steps()[1].matrix, grid(&[&[1, 0], &[0, 1]]));
        assert_eq!(trace.steps()[1].description, "Swap R1 ↔ R2");
        assert_eq!(trace.steps()[1].highlight_row, Some(0));
    }

    #[test]
    fn test_replay_detects_tampering() {
        let mut m = grid(&[&[1, 1], &[2, 3]]);
        let mut trace = Trace::new();
        trace.perform(RowOp::Initial, &mut m, None, None).unwrap();
        trace
            .perform(
                RowOp::Eliminate {
                    target: 1,
                    source: 0,
                    factor: q(2, 1),
                },
                &mut m,
                Some(1),
                Some(0),
            )
            .unwrap();

        let mut steps = trace.into_steps();
        assert_eq!(replay(&steps), Ok(grid(&[&[1, 1], &[0, 1]])));

        steps[1].matrix[(1, 1)] = q(7, 1);
        assert_eq!(replay(&steps), Err(SolveError::ReplayMismatch { step: 1 }));
        assert_eq!(replay(&[]), Err(SolveError::EmptyTrace));
    }
}
