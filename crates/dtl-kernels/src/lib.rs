#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the kernels module.
pub mod error;

/// module containing ops implementations.
pub mod ops;

pub use error::KernelError;
pub use ops::MulAccumulate;
