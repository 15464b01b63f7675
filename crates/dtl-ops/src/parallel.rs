use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how the independent output cells of an operation are computed.
///
/// Every strategy produces the same output: cells are written to their own slot and
/// the computation of one cell never reads another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to compute every cell in parallel.
    ParallelElements,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Builds a vector of `len` cells where cell `i` is `f(i)`, using the given strategy.
///
/// The first error returned by `f` aborts the operation and no partial output is
/// returned.
///
/// # Errors
///
/// * Any error returned by `f`.
/// * [`ParallelError::InvalidThreadCount`] or [`ParallelError::BuildError`] for a
///   [`ExecutionStrategy::Fixed`] pool that cannot be built.
///
/// # Example
///
/// ```
/// use dtl_ops::parallel::{collect_indexed, ExecutionStrategy, ParallelError};
///
/// let squares: Result<Vec<usize>, ParallelError> =
///     collect_indexed(ExecutionStrategy::ParallelElements, 4, |i| Ok(i * i));
/// assert_eq!(squares.unwrap(), vec![0, 1, 4, 9]);
/// ```
pub fn collect_indexed<T, E, F>(strategy: ExecutionStrategy, len: usize, f: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send + From<ParallelError>,
    F: Fn(usize) -> Result<T, E> + Sync + Send,
{
    match strategy {
        ExecutionStrategy::Serial => (0..len).map(f).collect(),
        ExecutionStrategy::ParallelElements => (0..len).into_par_iter().map(f).collect(),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n).into());
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| (0..len).into_par_iter().map(&f).collect())
        }
    }
}
