//! # rowred-linalg
//!
//! Dense matrices for the rowred elimination engine.
//!
//! This crate provides:
//! - `DenseMatrix<R>`, a row-major container with row operations
//! - Construction of augmented matrices `[A | b]`
//! - A plain-text renderer that marks the augmentation boundary and a
//!   highlighted row

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod display;
pub mod error;

pub use dense_matrix::DenseMatrix;
pub use display::AugmentedDisplay;
pub use error::LinalgError;
