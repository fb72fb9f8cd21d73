//! Text grammar for matrix cells.
//!
//! A cell holds one of:
//! - an integer: `-3`, `+12`
//! - a decimal: `0.25`, `-.5`, `7.`, `1.5e-3`
//! - a fraction: `3/4`, `-7 / 2`
//!
//! Decimals are read exactly: `d₁…dₙ.f₁…f_k × 10^e` becomes the integer
//! `d₁…dₙf₁…f_k` over `10^(k - e)`, so `0.1` is exactly `1/10`.

use crate::{Integer, Rational, RationalError};

/// Largest decimal exponent accepted, in either direction.
pub const MAX_EXPONENT: i64 = 4096;

/// Parses a cell strictly.
///
/// # Errors
///
/// Returns [`RationalError::Malformed`] when `text` matches none of the
/// accepted forms and [`RationalError::DivideByZero`] for a well-formed
/// fraction whose denominator is zero.
pub fn parse_rational(text: &str) -> Result<Rational, RationalError> {
    let trimmed = text.trim();
    if let Some((num, den)) = trimmed.split_once('/') {
        let malformed = || RationalError::Malformed(text.to_owned());
        if den.contains('/') {
            return Err(malformed());
        }
        let numerator: Integer = num.trim().parse().map_err(|_| malformed())?;
        let denominator: Integer = den.trim().parse().map_err(|_| malformed())?;
        return Rational::from_integer_pair(numerator, denominator);
    }
    parse_decimal(trimmed).ok_or_else(|| RationalError::Malformed(text.to_owned()))
}

fn parse_decimal(text: &str) -> Option<Rational> {
    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&text[..at], text[at + 1..].parse::<i64>().ok()?),
        None => (text, 0),
    };
    // The sign belongs to the whole part; the fraction is bare digits.
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: Integer = format!("{whole}{fraction}").parse().ok()?;

    let scale = exponent.checked_sub(i64::try_from(fraction.len()).ok()?)?;
    if scale.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
        return None;
    }
    let power = Integer::ten_pow(usize::try_from(scale.unsigned_abs()).ok()?);
    if scale >= 0 {
        Some(Rational::from_integer(digits * power))
    } else {
        Rational::from_integer_pair(digits, power).ok()
    }
}
