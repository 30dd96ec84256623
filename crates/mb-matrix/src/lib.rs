//! `mb-matrix` - Square-matrix multiplication engine for matbench.
//!
//! This crate provides:
//! - A [`Matrix`] type with flat, row-major `f64` storage
//! - A [`Multiplier`] trait for pluggable multiplication strategies
//! - [`NaiveMultiplier`], the textbook i-j-k triple loop
//! - [`BlockedMultiplier`], a cache-blocked (tiled) variant
//!
//! ## Usage
//!
//! ```
//! use mb_matrix::{multiply, multiply_tiled, Matrix};
//!
//! let a = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2);
//! let b = Matrix::new(vec![5.0, 6.0, 7.0, 8.0], 2);
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
//!
//! let c = multiply_tiled(&a, &b, 2).unwrap();
//! assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
//! ```

pub mod blocked;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub mod naive;

pub use blocked::BlockedMultiplier;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use multiplier::Multiplier;
pub use naive::NaiveMultiplier;

/// Multiply two square matrices with the naive triple loop.
///
/// # Errors
/// Returns `DimensionMismatch` if the matrices differ in dimension.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    NaiveMultiplier::new().multiply(a, b)
}

/// Multiply two square matrices with the cache-blocked algorithm.
///
/// # Errors
/// Returns `DimensionMismatch` if the matrices differ in dimension, or
/// `InvalidTileSize` if `tile_size` is zero or does not divide the
/// dimension exactly.
pub fn multiply_tiled(a: &Matrix, b: &Matrix, tile_size: usize) -> Result<Matrix> {
    BlockedMultiplier::new(tile_size).multiply(a, b)
}
