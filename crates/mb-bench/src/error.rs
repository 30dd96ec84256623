use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: missing matrix size")]
    MissingSize { line: usize },
    #[error("line {line}: invalid matrix size: {token:?}")]
    InvalidSize { line: usize, token: String },
    #[error("line {line}: invalid matrix value: {token:?}")]
    InvalidValue { line: usize, token: String },
    #[error("line {line}: expected {expected} values for a {n}x{n} matrix, got {got}")]
    ValueCount {
        line: usize,
        n: usize,
        expected: usize,
        got: usize,
    },
    #[error("expected an even number of matrix lines, got {0}")]
    OddLineCount(usize),
    #[error("input contains no matrix pairs")]
    EmptyInput,
    #[error("matrix error: {0}")]
    Matrix(#[from] mb_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
