//! Array-shape-transforming primitives for data preprocessing.
//!
//! * [`ops::window1d`] extracts strided sliding windows from a 1-D sequence.
//! * [`ops::correlate2d`] computes a strided valid-mode 2-D cross-correlation.
//! * [`ops::transpose2d`] swaps the axes of a matrix.
//!
//! ```
//! use dtl::ops::{window1d, WindowSpec};
//!
//! let windows = window1d(&[1, 2, 3, 4, 5, 6], WindowSpec::new(3).with_shift(2)).unwrap();
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![3, 4, 5]]);
//! ```

#[doc(inline)]
pub use dtl_tensor as tensor;

#[doc(inline)]
pub use dtl_kernels as kernels;

#[doc(inline)]
pub use dtl_ops as ops;
