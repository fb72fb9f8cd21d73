//! Traced Gaussian elimination over exact rationals.
//!
//! This crate solves a square system `A·x = b` by row reduction and records
//! every row operation it performs:
//!
//! - **Forward elimination**: first-non-zero pivoting down each column
//! - **Normal form**: optional reduction to reduced row-echelon form
//! - **Classification**: unique, infinite or no solution from the ranks of
//!   `A` and `[A | b]`
//! - **Extraction**: a point solution, or a parametric family in terms of
//!   the free variables
//!
//! Each [`SolverStep`] owns a deep copy of the matrix after its operation,
//! and [`replay`] re-executes a trace to audit it.
//!
//! # Example
//!
//! ```
//! use rowred_linalg::DenseMatrix;
//! use rowred_rational::Rational;
//! use rowred_solve::{solve, SolutionType};
//!
//! let a = DenseMatrix::from_rows(vec![
//!     vec![Rational::from(1), Rational::from(1)],
//!     vec![Rational::from(2), Rational::from(2)],
//! ])?;
//! let b = vec![Rational::from(3), Rational::from(6)];
//!
//! let result = solve(&a, &b, false)?;
//! assert_eq!(result.solution_type, SolutionType::Infinite);
//! assert_eq!(result.solution_text, ["x_1 = 3 - t", "x_2 = t (free)"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod elimination;
pub mod error;
pub mod expr;
pub mod extract;
pub mod rank;
pub mod solver;
pub mod step;

pub use elimination::{forward_eliminate, reduce_to_normal_form};
pub use error::SolveError;
pub use expr::{LinearExpr, Parameter, ParameterStyle};
pub use extract::{extract_solution, Extraction, Solution, VariableValue};
pub use rank::{classify, compute_ranks, Ranks, SolutionType};
pub use solver::{solve, solve_text, solve_with_config, SolveConfig, SolverResult};
pub use step::{replay, RowOp, SolverStep, Trace};

#[cfg(test)]
mod proptests;
