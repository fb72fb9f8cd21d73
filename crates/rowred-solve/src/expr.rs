//! Linear expressions in the free-variable parameters.
//!
//! In the infinite case every pivot variable is an affine function of the
//! free variables. Expressions are kept as data, a constant plus one
//! coefficient per parameter, and only turned into text at the end. Folding
//! one expression into another is then exact arithmetic, which is what lets
//! a pivot variable depend on a later pivot variable without the matrix
//! being in reduced form.

use std::fmt;

use num_traits::{One, Zero};
use rowred_rational::Rational;

/// How free variables are named.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParameterStyle {
    /// `t, s, r, q`, then `p5, p6, …`.
    #[default]
    Letters,
    /// `t1, t2, t3, …`.
    Indexed,
}

impl ParameterStyle {
    const LETTERS: [&'static str; 4] = ["t", "s", "r", "q"];

    /// Returns the name of the free variable with the given zero-based
    /// ordinal.
    #[must_use]
    pub fn name(self, ordinal: usize) -> String {
        match self {
            ParameterStyle::Letters => Self::LETTERS
                .get(ordinal)
                .map_or_else(|| format!("p{}", ordinal + 1), |s| (*s).to_owned()),
            ParameterStyle::Indexed => format!("t{}", ordinal + 1),
        }
    }
}

/// A free variable standing in for the unknown `x_{column + 1}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameter {
    /// Zero-based column of the free variable.
    pub column: usize,
    /// Display name.
    pub name: String,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `constant + Σ coefficient · parameter`.
///
/// Terms are sorted by parameter column and never carry a zero coefficient.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinearExpr {
    constant: Rational,
    terms: Vec<(Rational, Parameter)>,
}

impl LinearExpr {
    /// A constant expression.
    #[must_use]
    pub fn constant(value: Rational) -> Self {
        Self {
            constant: value,
            terms: Vec::new(),
        }
    }

    /// The expression consisting of one parameter.
    #[must_use]
    pub fn parameter(param: Parameter) -> Self {
        Self {
            constant: Rational::zero(),
            terms: vec![(Rational::one(), param)],
        }
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> &Rational {
        &self.constant
    }

    /// Returns the non-zero terms, sorted by parameter column.
    #[must_use]
    pub fn terms(&self) -> &[(Rational, Parameter)] {
        &self.terms
    }

    /// Returns the coefficient of `param`, zero if absent.
    #[must_use]
    pub fn coefficient(&self, param: &Parameter) -> Rational {
        self.terms
            .iter()
            .find(|(_, p)| p == param)
            .map_or_else(Rational::zero, |(c, _)| c.clone())
    }

    /// Returns true if no parameter appears.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// `self += factor · other`.
    pub fn add_scaled(&mut self, other: &LinearExpr, factor: &Rational) {
        if factor.is_zero() {
            return;
        }
        self.constant = &self.constant + &(factor * &other.constant);
        for (coeff, param) in &other.terms {
            let delta = factor * coeff;
            match self.terms.binary_search_by(|(_, p)| p.column.cmp(&param.column)) {
                Ok(at) => {
                    let sum = &self.terms[at].0 + &delta;
                    if sum.is_zero() {
                        self.terms.remove(at);
                    } else {
                        self.terms[at].0 = sum;
                    }
                }
                Err(at) => self.terms.insert(at, (delta, param.clone())),
            }
        }
    }

    /// Evaluates the expression with `value(param)` substituted for each
    /// parameter.
    pub fn evaluate<F>(&self, mut value: F) -> Rational
    where
        F: FnMut(&Parameter) -> Rational,
    {
        self.terms
            .iter()
            .fold(self.constant.clone(), |acc, (coeff, param)| {
                acc + coeff * &value(param)
            })
    }
}

/// Prints `3 - t + (1/2)s`.
///
/// A zero constant is omitted, unit coefficients print bare, fractional
/// coefficients are parenthesized, and the empty expression prints `0`.
impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if !self.constant.is_zero() {
            write!(f, "{}", self.constant)?;
            first = false;
        }
        for (coeff, param) in &self.terms {
            let magnitude = coeff.abs();
            match (first, coeff.is_negative()) {
                (true, false) => {}
                (true, true) => f.write_str("-")?,
                (false, false) => f.write_str(" + ")?,
                (false, true) => f.write_str(" - ")?,
            }
            if !magnitude.is_one() {
                if magnitude.is_integer() {
                    write!(f, "{magnitude}")?;
                } else {
                    write!(f, "({magnitude})")?;
                }
            }
            write!(f, "{param}")?;
            first = false;
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
