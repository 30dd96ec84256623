use std::path::Path;
use std::time::{Duration, Instant};

use mb_matrix::{BlockedMultiplier, Matrix, Multiplier, NaiveMultiplier};

use crate::error::Result;
use crate::reader::read_matrix_pairs;
use crate::report::BenchResult;

/// Timed invocations per matrix pair when the caller does not pick a count.
pub const DEFAULT_RUNS: usize = 10;

/// Harness configuration.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Timed invocations per pair. Must be at least 1.
    pub runs: usize,
    /// `Some(t)` selects the blocked strategy with tile width `t`;
    /// `None` selects the naive strategy.
    pub tile_size: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            runs: DEFAULT_RUNS,
            tile_size: None,
        }
    }
}

impl BenchConfig {
    /// The multiplication strategy this configuration selects.
    pub fn multiplier(&self) -> Box<dyn Multiplier> {
        match self.tile_size {
            Some(tile) => Box::new(BlockedMultiplier::new(tile)),
            None => Box::new(NaiveMultiplier::new()),
        }
    }
}

/// Time `runs` invocations of `multiplier` on one pair and average.
///
/// Each invocation allocates its own product, which is discarded after the
/// elapsed time is recorded; inputs are reused across runs unchanged.
///
/// # Errors
/// Engine validation errors (`DimensionMismatch`, `InvalidTileSize`)
/// surface on the first invocation, before any timing is reported.
///
/// # Panics
/// Panics if `runs == 0`.
pub fn run_pair(
    a: &Matrix,
    b: &Matrix,
    multiplier: &dyn Multiplier,
    runs: usize,
) -> Result<BenchResult> {
    assert!(runs >= 1, "run count must be at least 1");

    let mut total = Duration::ZERO;
    for _ in 0..runs {
        let start = Instant::now();
        let _product = multiplier.multiply(a, b)?;
        total += start.elapsed();
    }

    Ok(BenchResult {
        n: a.dim(),
        algorithm: multiplier.name().to_string(),
        runs,
        avg: total / runs as u32,
    })
}

/// Load a corpus file and benchmark every pair in it.
///
/// A pair the engine rejects (mismatched dimensions, invalid tile size) is
/// logged and skipped; the remaining pairs still run. Parse errors abort
/// the whole file.
pub fn run_file(path: &Path, config: &BenchConfig) -> Result<Vec<BenchResult>> {
    let pairs = read_matrix_pairs(path)?;
    let multiplier = config.multiplier();
    log::info!(
        "loaded {} matrix pair(s) from {}, timing {} x {} run(s) each",
        pairs.len(),
        path.display(),
        multiplier.name(),
        config.runs
    );

    let mut results = Vec::with_capacity(pairs.len());
    for (index, (a, b)) in pairs.iter().enumerate() {
        match run_pair(a, b, multiplier.as_ref(), config.runs) {
            Ok(result) => results.push(result),
            Err(e) => log::warn!("skipping pair {}: {}", index, e),
        }
    }
    Ok(results)
}
