use std::fmt;

/// A square, dense matrix of `f64` elements.
///
/// Holds contiguous, row-major storage: the element at row `i`, column `j`
/// lives at index `i * n + j`. The flat layout is load-bearing for the
/// blocked multiplier's locality behavior, so there is deliberately no
/// per-row nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    n: usize,
}

impl Matrix {
    /// Create a matrix from row-major data and a dimension.
    ///
    /// # Panics
    /// Panics if `n == 0` or `data.len() != n * n`.
    pub fn new(data: Vec<f64>, n: usize) -> Self {
        assert!(n >= 1, "matrix dimension must be at least 1");
        assert_eq!(
            data.len(),
            n * n,
            "data length {} does not match {}x{} matrix (expected {})",
            data.len(),
            n,
            n,
            n * n
        );
        Matrix { data, n }
    }

    /// Create a zero-filled `n x n` matrix.
    pub fn zeros(n: usize) -> Self {
        Matrix::new(vec![0.0; n * n], n)
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Matrix::new(data, n)
    }

    /// Dimension of the matrix (number of rows and columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns the row-major backing data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i >= n` or `j >= n`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds");
        self.data[i * self.n + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            for j in 0..self.n {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[i * self.n + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(m.dim(), 2);
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn test_zeros() {
        let z = Matrix::zeros(3);
        assert_eq!(z.dim(), 3);
        assert_eq!(z.data(), &[0.0; 9]);
    }

    #[test]
    fn test_identity() {
        let i = Matrix::identity(3);
        assert_eq!(
            i.data(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_one_by_one() {
        let m = Matrix::new(vec![7.5], 1);
        assert_eq!(m.dim(), 1);
        assert_eq!(m.get(0, 0), 7.5);
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch_panics() {
        let _m = Matrix::new(vec![1.0, 2.0, 3.0], 2);
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension_panics() {
        let _m = Matrix::new(vec![], 0);
    }

    #[test]
    fn test_display() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }
}
