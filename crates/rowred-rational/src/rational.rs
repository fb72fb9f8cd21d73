//! Exact rational numbers.
//!
//! `Rational` is an immutable value: every arithmetic operation returns a new
//! instance in lowest terms with a positive denominator. Addition,
//! subtraction and multiplication are plain operators; division is
//! [`Rational::checked_div`] because dividing by zero must abort the
//! computation that asked for it rather than panic.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::parse::parse_rational;
use crate::{Integer, RationalError};

/// An exact rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator,
/// so the derived equality, ordering and hashing are value based.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the denominator is zero.
    pub fn from_integer_pair(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        let negative = denominator.is_negative();
        let numerator = numerator.into_inner();
        let value = RBig::from_parts(
            if negative { -numerator } else { numerator },
            denominator.into_inner().unsigned_abs(),
        );
        Ok(Self(value))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::from_integer_pair(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Parses the text of a matrix cell, leniently.
    ///
    /// Empty or malformed text yields zero so that a half-typed cell never
    /// blocks a solve; use [`str::parse`] for the strict variant.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] for a well-formed fraction
    /// with a zero denominator, such as `"3/0"`.
    pub fn from_decimal_str(text: &str) -> Result<Self, RationalError> {
        match parse_rational(text) {
            Err(RationalError::Malformed(_)) => {
                if !text.trim().is_empty() {
                    log::warn!("treating malformed number {text:?} as zero");
                }
                Ok(Self::zero())
            }
            other => other,
        }
    }

    /// Converts a float, snapping near-integers and keeping at most six
    /// decimal places otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite);
        }
        let rounded = value.round();
        let text = if (rounded - value).abs() < 1e-10 {
            format!("{rounded:.0}")
        } else {
            format!("{value:.6}")
        };
        parse_rational(&text)
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Renders as LaTeX: `3`, `\frac{3}{4}` or `-\frac{3}{4}`.
    #[must_use]
    pub fn to_latex(&self) -> String {
        if self.is_integer() {
            return self.numerator().to_string();
        }
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{sign}\\frac{{{}}}{{{}}}",
            self.numerator().abs(),
            self.denominator()
        )
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_rational(text)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
