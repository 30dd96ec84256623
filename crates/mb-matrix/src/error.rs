use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("dimension mismatch: left is {left}x{left}, right is {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("tile size {tile_size} does not divide dimension {n}")]
    InvalidTileSize { tile_size: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
