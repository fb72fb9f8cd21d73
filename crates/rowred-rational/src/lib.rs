//! # rowred-rational
//!
//! Exact rational arithmetic for the rowred elimination engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Normalized rationals (`Rational`) with checked division
//! - Lenient and strict parsing of the text a user types into a matrix cell
//!
//! ## Normalization
//!
//! Every `Rational` is kept in lowest terms with a positive denominator, and
//! zero is always `0/1`. Structural equality is therefore value equality.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod parse;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::Integer;
pub use rational::Rational;
