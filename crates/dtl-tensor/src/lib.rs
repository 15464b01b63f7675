#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `dtl-tensor` is the container layer of the workspace. A [`Tensor`] owns a flat,
//! row-major buffer together with its shape and strides, and a [`TensorView`] borrows
//! that buffer with a different shape or stride layout (for example after permuting
//! the axes of a matrix).
//!
//! Rectangularity is a property of the type: a [`Tensor2`] always has `rows * cols`
//! elements. Row-based input coming from the outside is validated once, in
//! [`Tensor::from_rows`], and ragged rows are rejected there.
//!
//! # Quick Start
//!
//! ```rust
//! use dtl_tensor::Tensor2;
//!
//! let t = Tensor2::<f32>::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! assert_eq!(t.shape, [2, 3]);
//! assert_eq!(t.get([1, 2]), Some(&6.0));
//!
//! // swap the axes without copying, then materialize
//! let transposed = t.permute_axes([1, 0]).as_contiguous();
//! assert_eq!(transposed.shape, [3, 2]);
//! assert_eq!(transposed.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
//! ```

/// Serde module for JSON/other format serialization and deserialization.
///
/// Enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

/// Storage module containing the owned element buffer.
pub mod storage;

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

/// View module containing non-owning tensor view implementations.
pub mod view;

pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};
pub use crate::view::TensorView;

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;
