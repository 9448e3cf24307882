//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing the finite ring Z_m the cipher works in,
//! together with the matrix algebra (determinant, adjugate, inverse) built on top of it.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
