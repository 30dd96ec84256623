use std::fmt;
use std::time::Duration;

/// Timing summary for one matrix pair.
#[derive(Debug, Clone)]
pub struct BenchResult {
    /// Matrix dimension.
    pub n: usize,
    /// Name of the multiplication strategy that was timed.
    pub algorithm: String,
    /// Number of timed invocations averaged over.
    pub runs: usize,
    /// Average wall-clock time per invocation.
    pub avg: Duration,
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size: {n}x{n} | algorithm: {alg} | avg. time: {secs:.6} seconds",
            n = self.n,
            alg = self.algorithm,
            secs = self.avg.as_secs_f64()
        )
    }
}
