#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the shape-transforming operations.
///
/// Defines [`OpsError`] for invalid parameters, layouts and malformed inputs.
pub mod error;

/// Output-shape rules shared by windowing and correlation.
pub mod shape;

/// Strided sliding-window extraction over 1-D sequences.
pub mod window;

/// Valid-mode 2-D cross-correlation.
pub mod correlation;

/// Matrix transposition.
pub mod transpose;

/// Execution strategies for operations with independent output cells.
pub mod parallel;

pub use correlation::{correlate2d, correlate2d_rows, correlate2d_with, CorrelationElement};
pub use error::OpsError;
pub use parallel::ExecutionStrategy;
pub use transpose::{transpose2d, transpose2d_rows};
pub use window::{window1d, window1d_tensor, windows_iter, WindowSpec, Windows};
