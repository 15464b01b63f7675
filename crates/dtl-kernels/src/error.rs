use thiserror::Error;

/// An error type for slice-level kernels.
#[derive(Error, Debug, PartialEq)]
pub enum KernelError {
    /// Length mismatch for vector operations
    #[error("Length mismatch: expected equal length vectors, got {0} and {1}")]
    LengthMismatch(usize, usize),

    /// The requested region does not fit inside the source buffer.
    #[error("Region [{start}, {end}) out of bounds for buffer of length {len}")]
    OutOfBounds {
        /// First element of the region
        start: usize,
        /// One past the last element of the region
        end: usize,
        /// Length of the source buffer
        len: usize,
    },

    /// A 2-D patch anchored at `origin` does not fit inside the source grid.
    #[error("Patch of shape {patch:?} at {origin:?} exceeds grid of shape {shape:?}")]
    PatchOutOfBounds {
        /// Top-left corner of the patch as `[row, col]`
        origin: [usize; 2],
        /// Patch shape as `[rows, cols]`
        patch: [usize; 2],
        /// Source grid shape as `[rows, cols]`
        shape: [usize; 2],
    },

    /// A subsampling step of zero was requested.
    #[error("Step must be greater than zero")]
    ZeroStep,
}
