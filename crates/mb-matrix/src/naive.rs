use crate::error::Result;
use crate::matrix::Matrix;
use crate::multiplier::{check_dims, Multiplier};

/// Textbook triple-loop matrix multiplication.
///
/// Iterates `i` over rows, `j` over columns, and accumulates the dot product
/// over `k` in a local scalar before writing each output cell once. The
/// innermost loop walks B column-wise with stride `n`, which misses cache on
/// large matrices; this is the baseline the blocked strategy is measured
/// against.
///
/// The accumulation order (`k` ascending, one unbroken pass) is fixed, so
/// repeated calls with identical inputs produce bit-identical output.
#[derive(Debug, Clone)]
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    pub fn new() -> Self {
        NaiveMultiplier
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for NaiveMultiplier {
    fn name(&self) -> &str {
        "naive"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_dims(a, b)?;
        let (a, b) = (a.data(), b.data());

        let mut c = vec![0.0f64; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += a[i * n + k] * b[k * n + j];
                }
                c[i * n + j] = sum;
            }
        }
        Ok(Matrix::new(c, n))
    }
}
