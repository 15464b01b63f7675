use dtl_kernels::KernelError;
use dtl_tensor::TensorError;
use thiserror::Error;

use crate::parallel::ParallelError;

/// An error type for the shape-transforming operations.
///
/// Every variant is a caller contract violation reported before any output is
/// produced.
#[derive(Error, Debug, PartialEq)]
pub enum OpsError {
    /// A window size, shift or stride is not a positive integer.
    #[error("Invalid parameter `{name}`: must be a positive integer, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: usize,
    },

    /// The correlation kernel has no rows or no columns.
    #[error("Kernel must have at least one row and one column, got shape {0:?}")]
    EmptyKernel([usize; 2]),

    /// The input tensor does not use a row-major contiguous layout.
    #[error("Tensor with shape {shape:?} and strides {strides:?} is not in standard layout")]
    NonStandardLayout {
        /// Shape of the rejected tensor
        shape: Vec<usize>,
        /// Strides of the rejected tensor
        strides: Vec<usize>,
    },

    /// Tensor error
    #[error("Error with the tensor: {0}")]
    TensorError(#[from] TensorError),

    /// Kernel error
    #[error(transparent)]
    KernelError(#[from] KernelError),

    /// Parallel execution error
    #[error(transparent)]
    ParallelError(#[from] ParallelError),
}
