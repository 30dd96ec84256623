use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mb_matrix::Matrix;

/// Lower bound (inclusive) of generated element values.
pub const VALUE_MIN: f64 = 0.0;
/// Upper bound (exclusive) of generated element values.
pub const VALUE_MAX: f64 = 10.0;

/// Produces randomly filled square matrices.
///
/// Elements are drawn uniformly from `[VALUE_MIN, VALUE_MAX)`. The generator
/// is backed by a `StdRng`, so seeding it makes the emitted corpus
/// reproducible.
pub struct MatrixGenerator {
    rng: StdRng,
    dist: Uniform<f64>,
}

impl MatrixGenerator {
    /// Create a generator with the given seed for reproducible output.
    pub fn from_seed(seed: u64) -> Self {
        MatrixGenerator {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(VALUE_MIN, VALUE_MAX),
        }
    }

    /// Create a generator seeded from system entropy.
    pub fn from_entropy() -> Self {
        MatrixGenerator {
            rng: StdRng::from_entropy(),
            dist: Uniform::new(VALUE_MIN, VALUE_MAX),
        }
    }

    /// Generate one `n x n` matrix.
    ///
    /// # Panics
    /// Panics if `n == 0` (the matrix constructor rejects it).
    pub fn generate(&mut self, n: usize) -> Matrix {
        let data: Vec<f64> = (0..n * n)
            .map(|_| self.dist.sample(&mut self.rng))
            .collect();
        Matrix::new(data, n)
    }

    /// Generate a pair of `n x n` matrices for one benchmark run.
    pub fn generate_pair(&mut self, n: usize) -> (Matrix, Matrix) {
        (self.generate(n), self.generate(n))
    }
}
