//! Forward elimination and reduction to normal form.
//!
//! Both passes work on an augmented matrix whose last column is the
//! right-hand side; pivots are only ever searched for among the coefficient
//! columns. Every change goes through [`Trace::perform`], so the trace is a
//! faithful, replayable record of the pass.

use num_traits::{One, Zero};
use rowred_linalg::DenseMatrix;
use rowred_rational::Rational;

use crate::{RowOp, SolveError, Trace};

/// Reduces `matrix` to row-echelon form.
///
/// Columns are visited left to right. The pivot of a column is the first
/// non-zero entry at or below the current pivot row, not the largest one:
/// arithmetic is exact, and the first candidate keeps the trace readable.
/// A column with no candidate is skipped and its variable stays free.
///
/// # Errors
///
/// Propagates arithmetic failures. A pivot is non-zero by construction, so
/// this cannot fail on a well-formed matrix.
pub fn forward_eliminate(
    matrix: &mut DenseMatrix<Rational>,
    trace: &mut Trace,
) -> Result<(), SolveError> {
    let num_rows = matrix.num_rows();
    let coefficient_cols = matrix.num_cols().saturating_sub(1);
    let mut pivot_row = 0;

    for col in 0..coefficient_cols {
        if pivot_row >= num_rows {
            break;
        }

        // Find pivot (first non-zero in column)
        let Some(found) = (pivot_row..num_rows).find(|&row| !matrix[(row, col)].is_zero()) else {
            log::debug!("column {} has no pivot", col + 1);
            continue;
        };
        log::debug!("pivot for column {} found in row {}", col + 1, found + 1);

        if found != pivot_row {
            let swap = RowOp::Swap {
                first: pivot_row,
                second: found,
            };
            trace.perform(swap, matrix, Some(pivot_row), None)?;
        }

        // Eliminate entries below pivot
        let pivot = matrix[(pivot_row, col)].clone();
        for row in pivot_row + 1..num_rows {
            let entry = &matrix[(row, col)];
            if entry.is_zero() {
                continue;
            }
            let factor = entry.checked_div(&pivot)?;
            let op = RowOp::Eliminate {
                target: row,
                source: pivot_row,
                factor,
            };
            trace.perform(op, matrix, Some(row), Some(col))?;
        }

        pivot_row += 1;
    }

    Ok(())
}

/// Reduces a row-echelon `matrix` to reduced row-echelon form.
///
/// Rows are visited bottom-up. Each pivot is scaled to one and then cleared
/// from every row above it. A marker step is recorded first, even when the
/// matrix is already reduced, so applying this twice leaves the matrix
/// unchanged and only adds the marker.
///
/// # Errors
///
/// Propagates arithmetic failures. Pivots are non-zero by construction.
pub fn reduce_to_normal_form(
    matrix: &mut DenseMatrix<Rational>,
    trace: &mut Trace,
) -> Result<(), SolveError> {
    trace.perform(RowOp::BeginReduction, matrix, None, None)?;
    let coefficient_cols = matrix.num_cols().saturating_sub(1);

    for row in (0..matrix.num_rows()).rev() {
        let Some(pivot_col) = matrix.leading_index(row, coefficient_cols) else {
            continue;
        };

        let pivot = matrix[(row, pivot_col)].clone();
        if !pivot.is_one() {
            let op = RowOp::Normalize { row, pivot };
            trace.perform(op, matrix, Some(row), Some(pivot_col))?;
        }

        for above in (0..row).rev() {
            let factor = matrix[(above, pivot_col)].clone();
            if factor.is_zero() {
                continue;
            }
            let op = RowOp::Eliminate {
                target: above,
                source: row,
                factor,
            };
            trace.perform(op, matrix, Some(above), Some(pivot_col))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay;

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

    fn start(matrix: &mut DenseMatrix<Rational>) -> Trace {
        let mut trace = Trace::new();
        trace.perform(RowOp::Initial, matrix, None, None).unwrap();
        trace
    }

    #[test]
    fn test_forward_produces_echelon_form() {
        let mut m = grid(&[&[1, 2, 5], &[3, 4, 6]]);
        let mut trace = start(&mut m);
        forward_eliminate(&mut m, &mut trace).unwrap();

        assert_eq!(m, grid(&[&[1, 2, 5], &[0, -2, -9]]));
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.steps()[1].description, "R2 → R2 - (3)R1");
        assert_eq!(trace.steps()[1].highlight_row, Some(1));
        assert_eq!(trace.steps()[1].highlight_col, Some(0));
    }

    #[test]
    fn test_forward_swaps_first_non_zero() {
        let mut m = grid(&[&[0, 1, 1], &[0, 2, 2], &[3, 0, 3]]);
        let mut trace = start(&mut m);
        forward_eliminate(&mut m, &mut trace).unwrap();

        let first = &trace.steps()[1];
        assert_eq!(first.op, RowOp::Swap { first: 0, second: 2 });
        assert_eq!(first.description, "Swap R1 ↔ R3");
        assert_eq!(first.highlight_row, Some(0));
        assert_eq!(m, grid(&[&[3, 0, 3], &[0, 2, 2], &[0, 0, 0]]));
    }

    #[test]
    fn test_forward_skips_empty_column() {
        // Column 1 is zero; the pivot row pointer must not advance past it.
        let mut m = grid(&[&[0, 1, 2, 1], &[0, 2, 5, 3], &[0, 0, 1, 1]]);
        let mut trace = start(&mut m);
        forward_eliminate(&mut m, &mut trace).unwrap();

        assert_eq!(m, grid(&[&[0, 1, 2, 1], &[0, 0, 1, 1], &[0, 0, 0, 0]]));
        assert!(replay(trace.steps()).is_ok());
    }

    #[test]
    fn test_forward_fractional_factor() {
        let mut m = grid(&[&[2, 1, 1], &[3, 1, 2]]);
        let mut trace = start(&mut m);
        forward_eliminate(&mut m, &mut trace).unwrap();

        assert_eq!(trace.steps()[1].description, "R2 → R2 - (3/2)R1");
        assert_eq!(m.row(1), &[q(0, 1), q(-1, 2), q(1, 2)]);
    }

    #[test]
    fn test_reduce_to_identity() {
        let mut m = grid(&[&[2, 0, 1], &[0, 2, 1]]);
        let mut trace = start(&mut m);
        forward_eliminate(&mut m, &mut trace).unwrap();
        reduce_to_normal_form(&mut m, &mut trace).unwrap();

        assert_eq!(m.row(0), &[q(1, 1), q(0, 1), q(1, 2)]);
        assert_eq!(m.row(1), &[q(0, 1), q(1, 1), q(1, 2)]);
        let descriptions: Vec<&str> = trace.steps().iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            [
                "Initial Augmented Matrix [A|b]",
                "Beginning reduction to RREF...",
                "R2 → (1/2)R2 (Normalize pivot)",
                "R1 → (1/2)R1 (Normalize pivot)",
            ]
        );
    }

    #[test]
    fn test_reduce_clears_above() {
        let mut m = grid(&[&[1, 2, 3, 4], &[0, 1, 1, 1], &[0, 0, 0, 0]]);
        let mut trace = start(&mut m);
        reduce_to_normal_form(&mut m, &mut trace).unwrap();

        assert_eq!(m, grid(&[&[1, 0, 1, 2], &[0, 1, 1, 1], &[0, 0, 0, 0]]));
        assert_eq!(trace.steps()[2].description, "R1 → R1 - (2)R2");
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let mut m = grid(&[&[2, 4, 6, 8], &[0, 3, 3, 3], &[0, 0, 5, 10]]);
        let mut trace = start(&mut m);
        reduce_to_normal_form(&mut m, &mut trace).unwrap();
        let once = m.clone();
        let steps_once = trace.len();

        reduce_to_normal_form(&mut m, &mut trace).unwrap();
        assert_eq!(m, once);
        assert_eq!(trace.len(), steps_once + 1);
    }
}
