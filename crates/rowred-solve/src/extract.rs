//! Closed-form solutions from a classified echelon matrix.

use std::fmt;

use num_traits::Zero;
use rowred_linalg::DenseMatrix;
use rowred_rational::Rational;

use crate::{LinearExpr, Parameter, ParameterStyle, SolutionType, SolveError};

/// The line emitted for an inconsistent system.
pub const INCONSISTENT_LINE: &str = "System is inconsistent (0 ≠ c in a row).";

/// The value of one unknown in a parametric family.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VariableValue {
    /// A free variable, equal to its own parameter.
    Free(Parameter),
    /// A pivot variable expressed in the parameters.
    Bound(LinearExpr),
}

impl VariableValue {
    /// Returns the value as an expression in the parameters.
    #[must_use]
    pub fn to_expr(&self) -> LinearExpr {
        match self {
            VariableValue::Free(param) => LinearExpr::parameter(param.clone()),
            VariableValue::Bound(expr) => expr.clone(),
        }
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Free(param) => write!(f, "{param} (free)"),
            VariableValue::Bound(expr) => write!(f, "{expr}"),
        }
    }
}

/// Structured solution of a system.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Solution {
    /// One value per unknown, `x_1` first.
    Unique(Vec<Rational>),
    /// One expression per unknown, `x_1` first.
    Parametric(Vec<VariableValue>),
    /// No solution exists.
    Inconsistent,
}

impl Solution {
    /// Renders one line per unknown, or the single inconsistency line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Solution::Unique(values) => numbered_lines(values),
            Solution::Parametric(values) => numbered_lines(values),
            Solution::Inconsistent => vec![INCONSISTENT_LINE.to_owned()],
        }
    }
}

/// `x_1 = …`, `x_2 = …`, one line per value.
fn numbered_lines<T: fmt::Display>(values: &[T]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("x_{} = {v}", i + 1))
        .collect()
}

/// Output of [`extract_solution`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    /// The structured solution.
    pub solution: Solution,
    /// Back-substitution working, one line per unknown in index order.
    /// Only filled for a unique solution of an unreduced matrix.
    pub derivation: Vec<String>,
}

/// Extracts the solution of an echelon-form augmented matrix.
///
/// `reduced` tells whether the matrix is in reduced row-echelon form, in
/// which case a unique solution is read straight off the last column.
///
/// # Errors
///
/// Returns [`SolveError::Empty`] for a matrix with no rows or columns,
/// [`SolveError::ShapeMismatch`] when the column count is not one more than
/// the row count, [`SolveError::NotEchelon`] when a parametric solution is
/// asked of a matrix that is not in row-echelon form, and arithmetic errors
/// when a unique solution meets a zero diagonal entry.
pub fn extract_solution(
    matrix: &DenseMatrix<Rational>,
    solution_type: SolutionType,
    reduced: bool,
    style: ParameterStyle,
) -> Result<Extraction, SolveError> {
    if matrix.num_rows() == 0 || matrix.num_cols() == 0 {
        return Err(SolveError::Empty);
    }
    if matrix.num_cols() != matrix.num_rows() + 1 {
        return Err(SolveError::ShapeMismatch {
            expected: matrix.num_rows() + 1,
            got: matrix.num_cols(),
        });
    }

    match solution_type {
        SolutionType::Inconsistent => Ok(Extraction {
            solution: Solution::Inconsistent,
            derivation: Vec::new(),
        }),
        SolutionType::Unique if reduced => Ok(Extraction {
            solution: Solution::Unique(matrix.col(matrix.num_rows())),
            derivation: Vec::new(),
        }),
        SolutionType::Unique => back_substitute(matrix),
        SolutionType::Infinite => Ok(Extraction {
            solution: Solution::Parametric(parametrize(matrix, style)?),
            derivation: Vec::new(),
        }),
    }
}

/// `x_i = (b_i - Σ_{j>i} m_ij · x_j) / m_ii`, from the last row up.
fn back_substitute(matrix: &DenseMatrix<Rational>) -> Result<Extraction, SolveError> {
    let n = matrix.num_rows();
    let mut x = vec![Rational::zero(); n];
    let mut derivation = Vec::with_capacity(n);

    for i in (0..n).rev() {
        let row = matrix.row(i);
        let mut working = format!("x_{} = ({}", i + 1, row[n]);
        let mut sum = Rational::zero();
        for j in i + 1..n {
            if row[j].is_zero() {
                continue;
            }
            sum = sum + &row[j] * &x[j];
            working.push_str(&format!(" - ({})({})", row[j], x[j]));
        }
        x[i] = (&row[n] - &sum).checked_div(&row[i])?;
        derivation.push(format!("{working}) / {} = {}", row[i], x[i]));
    }
    derivation.reverse();

    Ok(Extraction {
        solution: Solution::Unique(x),
        derivation,
    })
}

/// Expresses every unknown in terms of the free variables.
///
/// Free variables take parameters in increasing column order. Pivot rows are
/// then solved bottom-up; a later pivot column's coefficient is folded in
/// through that column's already-derived expression, so the result is exact
/// for any row-echelon matrix, reduced or not.
fn parametrize(
    matrix: &DenseMatrix<Rational>,
    style: ParameterStyle,
) -> Result<Vec<VariableValue>, SolveError> {
    let n = matrix.num_rows();
    let leading: Vec<Option<usize>> = (0..matrix.num_rows())
        .map(|row| matrix.leading_index(row, n))
        .collect();

    let mut values: Vec<Option<VariableValue>> = vec![None; n];
    let mut ordinal = 0;
    for (col, value) in values.iter_mut().enumerate() {
        if !leading.contains(&Some(col)) {
            let param = Parameter {
                column: col,
                name: style.name(ordinal),
            };
            log::debug!("x_{} is free, named {}", col + 1, param);
            *value = Some(VariableValue::Free(param));
            ordinal += 1;
        }
    }

    for (row, pivot_col) in leading.iter().enumerate().rev() {
        let Some(pivot_col) = *pivot_col else {
            continue;
        };
        if values[pivot_col].is_some() {
            return Err(SolveError::NotEchelon { row });
        }

        let entries = matrix.row(row);
        let pivot = &entries[pivot_col];
        let mut expr = LinearExpr::constant(entries[n].checked_div(pivot)?);
        for j in pivot_col + 1..n {
            if entries[j].is_zero() {
                continue;
            }
            let factor = entries[j].checked_div(pivot)?;
            let known = values[j].as_ref().ok_or(SolveError::NotEchelon { row })?;
            expr.add_scaled(&known.to_expr(), &-factor);
        }
        values[pivot_col] = Some(VariableValue::Bound(expr));
    }

    values
        .into_iter()
        .map(|value| value.ok_or(SolveError::NotEchelon { row: 0 }))
        .collect()
}
