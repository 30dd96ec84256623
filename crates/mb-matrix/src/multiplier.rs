use std::fmt::Debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Trait for pluggable multiplication strategies.
///
/// Implementations take two square matrices of equal dimension and return a
/// freshly allocated product. Inputs are never mutated and no state is kept
/// between calls, so a single instance can be reused across repeated timed
/// invocations.
pub trait Multiplier: Send + Sync + Debug {
    /// Returns the name of this strategy (e.g., "naive", "blocked").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A * B.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `a.dim() != b.dim()`. The blocked
    /// strategy additionally returns `InvalidTileSize` (see
    /// [`crate::BlockedMultiplier`]). Validation happens before any output
    /// allocation or arithmetic.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}

/// Checks that both inputs share a dimension, returning it.
pub(crate) fn check_dims(a: &Matrix, b: &Matrix) -> Result<usize> {
    if a.dim() != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(a.dim())
}
