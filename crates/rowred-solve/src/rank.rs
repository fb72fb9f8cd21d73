//! Ranks and the rank-based classification of a reduced system.

use std::fmt;

use num_traits::Zero;
use rowred_linalg::DenseMatrix;
use rowred_rational::Rational;

/// Ranks of the coefficient part and of the whole augmented matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ranks {
    /// Rows whose coefficient entries are not all zero.
    pub rank_a: usize,
    /// Rows that are not zero across all columns, right-hand side included.
    pub rank_aug: usize,
}

/// The shape of the solution set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolutionType {
    /// Exactly one solution.
    Unique,
    /// A family of solutions parametrized by the free variables.
    Infinite,
    /// No solution: some row reads `0 = c` with `c ≠ 0`.
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    Inconsistent,
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolutionType::Unique => "unique",
            SolutionType::Infinite => "infinite",
            SolutionType::Inconsistent => "none",
        })
    }
}

/// Counts the non-trivial rows of an echelon-form augmented matrix.
///
/// The last column is the right-hand side. Each row is tested on its own
/// for both counts.
#[must_use]
pub fn compute_ranks(matrix: &DenseMatrix<Rational>) -> Ranks {
    let boundary = matrix.num_cols().saturating_sub(1);
    let mut ranks = Ranks {
        rank_a: 0,
        rank_aug: 0,
    };
    for row in 0..matrix.num_rows() {
        let zero_a = matrix.is_zero_prefix(row, boundary);
        if !zero_a {
            ranks.rank_a += 1;
        }
        if !zero_a || !matrix[(row, boundary)].is_zero() {
            ranks.rank_aug += 1;
        }
    }
    ranks
}

/// Classifies a system of `n` unknowns from its ranks.
#[must_use]
pub fn classify(ranks: Ranks, n: usize) -> SolutionType {
    if ranks.rank_a < ranks.rank_aug {
        SolutionType::Inconsistent
    } else if ranks.rank_a < n {
        SolutionType::Infinite
    } else {
        SolutionType::Unique
    }
}
