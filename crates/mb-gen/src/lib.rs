//! `mb-gen` - Random square-matrix corpus producer for matbench.
//!
//! Emits pairs of randomly filled square matrices in the shared text
//! encoding consumed by the benchmark harness: `n,v0,v1,...`, one matrix
//! per line. Matrices in a file are read in sequential pairs, so the writer
//! always emits two lines per requested size.

pub mod generator;
pub mod writer;

pub use generator::{MatrixGenerator, VALUE_MAX, VALUE_MIN};
pub use writer::{encode_line, write_corpus, write_pairs};

/// Matrix sizes emitted when the caller does not pick any.
pub const DEFAULT_SIZES: [usize; 3] = [400, 1000, 2000];
