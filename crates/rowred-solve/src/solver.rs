//! The `solve` entry points.

use rowred_linalg::DenseMatrix;
use rowred_rational::Rational;

use crate::{
    classify, compute_ranks, extract_solution, forward_eliminate, reduce_to_normal_form,
    ParameterStyle, RowOp, Solution, SolutionType, SolveError, SolverStep, Trace,
};

/// Configuration for a solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    /// Run the reduction to reduced row-echelon form after forward
    /// elimination.
    pub reduce_to_normal_form: bool,
    /// Naming scheme for free variables.
    pub parameter_style: ParameterStyle,
}

/// Everything one solve produces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolverResult {
    /// The elimination transcript, starting with the augmented matrix.
    pub steps: Vec<SolverStep>,
    /// Shape of the solution set.
    pub solution_type: SolutionType,
    /// One display line per unknown, or the inconsistency line.
    pub solution_text: Vec<String>,
    /// Rank of the coefficient matrix.
    pub rank_a: usize,
    /// Rank of the augmented matrix.
    pub rank_aug: usize,
    /// The working matrix after the last step.
    pub final_matrix: DenseMatrix<Rational>,
    /// The structured form of `solution_text`.
    pub solution: Solution,
    /// Back-substitution working for a unique solution found without
    /// reduction to normal form.
    pub derivation: Vec<String>,
}

impl SolverResult {
    /// Number of unknowns.
    #[must_use]
    pub fn num_unknowns(&self) -> usize {
        self.final_matrix.num_rows()
    }

    /// Number of free variables, zero unless the solution is infinite.
    #[must_use]
    pub fn nullity(&self) -> usize {
        match self.solution_type {
            SolutionType::Infinite => self.num_unknowns() - self.rank_a,
            _ => 0,
        }
    }
}

/// Solves `A·x = b` with the given normal-form setting and default naming.
///
/// # Errors
///
/// See [`solve_with_config`].
pub fn solve(
    a: &DenseMatrix<Rational>,
    b: &[Rational],
    reduce_to_normal_form: bool,
) -> Result<SolverResult, SolveError> {
    let config = SolveConfig {
        reduce_to_normal_form,
        ..SolveConfig::default()
    };
    solve_with_config(a, b, &config)
}

/// Solves `A·x = b`.
///
/// # Errors
///
/// Returns [`SolveError::Empty`], [`SolveError::NotSquare`] or
/// [`SolveError::ShapeMismatch`] when the inputs do not form an `N×N`
/// system with `N ≥ 1`, and propagates arithmetic failures. No partial
/// result is returned on error.
pub fn solve_with_config(
    a: &DenseMatrix<Rational>,
    b: &[Rational],
    config: &SolveConfig,
) -> Result<SolverResult, SolveError> {
    let n = a.num_rows();
    if n == 0 {
        return Err(SolveError::Empty);
    }
    if !a.is_square() {
        return Err(SolveError::NotSquare {
            rows: n,
            cols: a.num_cols(),
        });
    }
    if b.len() != n {
        return Err(SolveError::ShapeMismatch {
            expected: n,
            got: b.len(),
        });
    }
    log::debug!("solving {n}x{n} system, {config:?}");

    let mut matrix = a.augment(b)?;
    let mut trace = Trace::new();
    trace.perform(RowOp::Initial, &mut matrix, None, None)?;

    forward_eliminate(&mut matrix, &mut trace)?;
    if config.reduce_to_normal_form {
        reduce_to_normal_form(&mut matrix, &mut trace)?;
    }

    let ranks = compute_ranks(&matrix);
    let solution_type = classify(ranks, n);
    log::debug!(
        "rank(A) = {}, rank([A|b]) = {}: {solution_type}",
        ranks.rank_a,
        ranks.rank_aug
    );

    let extraction = extract_solution(
        &matrix,
        solution_type,
        config.reduce_to_normal_form,
        config.parameter_style,
    )?;

    Ok(SolverResult {
        steps: trace.into_steps(),
        solution_type,
        solution_text: extraction.solution.lines(),
        rank_a: ranks.rank_a,
        rank_aug: ranks.rank_aug,
        final_matrix: matrix,
        solution: extraction.solution,
        derivation: extraction.derivation,
    })
}

/// Solves a system given as the raw text of its cells.
///
/// Each cell is parsed leniently: empty or malformed text counts as zero.
/// Callers that want to reject malformed cells should validate them with
/// `str::parse::<Rational>` first.
///
/// # Errors
///
/// Returns [`SolveError::Arithmetic`] for a cell like `"1/0"`,
/// [`SolveError::Linalg`] for ragged rows, and everything
/// [`solve_with_config`] returns.
pub fn solve_text<S: AsRef<str>>(
    a_cells: &[Vec<S>],
    b_cells: &[S],
    config: &SolveConfig,
) -> Result<SolverResult, SolveError> {
    let rows = a_cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| Rational::from_decimal_str(cell.as_ref()))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    let b = b_cells
        .iter()
        .map(|cell| Rational::from_decimal_str(cell.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let a = DenseMatrix::from_rows(rows)?;
    solve_with_config(&a, &b, config)
}
