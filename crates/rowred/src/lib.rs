//! # rowred
//!
//! Exact, step-by-step Gaussian elimination for small square systems.
//!
//! rowred solves `A·x = b` over the rationals and keeps a replayable
//! transcript of every row operation, so the solution can be shown the way
//! it would be worked by hand.
//!
//! ## Features
//!
//! - **Exact arithmetic**: arbitrary precision fractions, always in lowest terms
//! - **Forgiving input**: integers, decimals and fractions typed as text
//! - **Full trace**: a snapshot of the matrix after each row operation
//! - **Classification**: unique, infinite or no solution, from the ranks
//! - **Parametric families**: pivot variables in terms of free parameters
//!
//! ## Quick Start
//!
//! ```
//! use rowred::prelude::*;
//!
//! let a = vec![vec!["2", "0"], vec!["0", "2"]];
//! let b = vec!["1", "1"];
//! let result = solve_text(&a, &b, &SolveConfig::default())?;
//!
//! assert_eq!(result.solution_type, SolutionType::Unique);
//! assert_eq!(result.solution_text, ["x_1 = 1/2", "x_2 = 1/2"]);
//! # Ok::<(), SolveError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rowred_linalg as linalg;
pub use rowred_rational as rational;
pub use rowred_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rowred_linalg::{AugmentedDisplay, DenseMatrix};
    pub use rowred_rational::{Integer, Rational, RationalError};
    pub use rowred_solve::{
        solve, solve_text, solve_with_config, ParameterStyle, Solution, SolutionType,
        SolveConfig, SolveError, SolverResult, SolverStep,
    };
}
