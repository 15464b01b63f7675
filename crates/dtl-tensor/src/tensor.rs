use thiserror::Error;

use crate::{storage::TensorStorage, view::TensorView};

/// Error type for tensor construction and access.
///
/// Every variant describes a caller contract violation; none of them is recoverable
/// by retrying the same call.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    ///
    /// The product of the shape dimensions must equal the number of elements.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// Index exceeds tensor bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// Row-based input is not rectangular.
    ///
    /// Raised by [`Tensor::from_rows`] when a row length differs from the first row.
    #[error("Ragged rows: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
}

impl TensorError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error with clear context.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a RaggedRows error with clear context.
    pub fn ragged_rows(row: usize, expected: usize, actual: usize) -> Self {
        Self::RaggedRows {
            row,
            expected,
            actual,
        }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// For row-major layout, the rightmost dimension has stride 1, and each dimension's
/// stride is the product of all dimensions to its right.
///
/// # Examples
///
/// ```rust
/// use dtl_tensor::get_strides_from_shape;
///
/// let strides = get_strides_from_shape([2, 3]);
/// assert_eq!(strides, [3, 1]);
///
/// let strides = get_strides_from_shape([2, 3, 4]);
/// assert_eq!(strides, [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array (tensor) with owned data.
///
/// `Tensor` combines an owned element buffer, the shape, and the memory layout
/// (strides) into a single structure whose dimensionality `N` is checked at compile
/// time. The element type `T` is carried through every operation, so integer input
/// yields integer output and float input yields float output.
///
/// Tensors built by the constructors in this crate always use row-major layout.
///
/// # Examples
///
/// ```rust
/// use dtl_tensor::Tensor2;
///
/// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(t.shape, [2, 2]);
/// assert_eq!(t.strides, [2, 1]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, const N: usize> {
    /// The storage of the tensor.
    pub storage: TensorStorage<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Get the data of the tensor as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Arguments
    ///
    /// * `shape` - An array containing the shape of the tensor.
    /// * `data` - A vector containing the data of the tensor.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use dtl_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.shape, [2, 2]);
    ///
    /// assert!(Tensor2::<u8>::from_shape_vec([2, 3], vec![1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            storage: TensorStorage::from_vec(data),
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Tensor` with the given shape filled with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use dtl_tensor::{Tensor1, Tensor2};
    ///
    /// let t = Tensor1::<u8>::from_shape_val([4], 0);
    /// assert_eq!(t.as_slice(), &[0, 0, 0, 0]);
    ///
    /// let t = Tensor2::<u8>::from_shape_val([2, 2], 1);
    /// assert_eq!(t.as_slice(), &[1, 1, 1, 1]);
    /// ```
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            storage: TensorStorage::from_vec(vec![value; numel]),
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Create a new `Tensor` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called with the index of each element, in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use dtl_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_fn([2, 2], |[i, j]| (i * 2 + j) as u8);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], f: F) -> Self
    where
        F: Fn([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let data: Vec<T> = (0..numel)
            .map(|i| {
                let mut index = [0; N];
                let mut j = i;
                for k in (0..N).rev() {
                    index[k] = j % shape[k];
                    j /= shape[k];
                }
                f(index)
            })
            .collect();
        Self {
            storage: TensorStorage::from_vec(data),
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the tensor holds no elements.
    ///
    /// A tensor is empty as soon as one of its dimensions is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Get the offset of the element at the given index.
    ///
    /// Returns `None` if any component of the index is out of bounds.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Get the element at the given index, checking if the index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use dtl_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    ///
    /// assert_eq!(t.get([0, 1]), Some(&2));
    /// assert_eq!(t.get([1, 0]), Some(&3));
    /// assert!(t.get([2, 0]).is_none());
    /// ```
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.get_iter_offset(index)
            .and_then(|i| self.storage.as_slice().get(i))
    }

    /// Permutes (reorders) the dimensions of the tensor.
    ///
    /// This is a zero-copy operation that returns a view with reordered dimensions.
    /// `axes[i]` indicates which source dimension becomes the i-th dimension in the output.
    ///
    /// # Panics
    ///
    /// Panics if an entry of `axes` is not smaller than `N`.
    pub fn permute_axes(&self, axes: [usize; N]) -> TensorView<'_, T, N> {
        let mut new_shape = [0; N];
        let mut new_strides = [0; N];
        for (i, &axis) in axes.iter().enumerate() {
            new_shape[i] = self.shape[axis];
            new_strides[i] = self.strides[axis];
        }

        TensorView {
            storage: &self.storage,
            shape: new_shape,
            strides: new_strides,
        }
    }

    /// Checks if the tensor has a standard contiguous (row-major) memory layout.
    pub fn is_standard_layout(&self) -> bool {
        let mut expected_stride: usize = 1;
        for (&dim, &stride) in self.shape.iter().rev().zip(self.strides.iter().rev()) {
            if stride != expected_stride {
                return false;
            }
            expected_stride = expected_stride.saturating_mul(dim);
        }
        true
    }
}

impl<T> Tensor<T, 2> {
    /// Creates a matrix from a sequence of rows.
    ///
    /// All rows must have the length of the first row. The check runs over every row
    /// before any element is copied. An empty sequence yields a `[0, 0]` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::RaggedRows`] for the first row whose length differs.
    ///
    /// # Example
    ///
    /// ```
    /// use dtl_tensor::{Tensor2, TensorError};
    ///
    /// let t = Tensor2::<i32>::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    /// assert_eq!(t.shape, [3, 2]);
    ///
    /// let err = Tensor2::<i32>::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
    /// assert_eq!(err, TensorError::ragged_rows(1, 2, 1));
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, TensorError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let num_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != num_cols)
        {
            return Err(TensorError::ragged_rows(i, num_cols, row.as_ref().len()));
        }

        let mut data = Vec::with_capacity(rows.len() * num_cols);
        rows.iter()
            .for_each(|row| data.extend_from_slice(row.as_ref()));

        Self::from_shape_vec([rows.len(), num_cols], data)
    }

    /// Returns the number of rows of the matrix.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Returns the number of columns of the matrix.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Returns the `i`-th row as a contiguous slice.
    ///
    /// The tensor is expected to be in standard layout.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IndexOutOfBounds`] if `i >= rows`.
    pub fn row(&self, i: usize) -> Result<&[T], TensorError> {
        if i >= self.rows() {
            return Err(TensorError::index_out_of_bounds(i, self.rows()));
        }
        let start = i * self.strides[0];
        Ok(&self.as_slice()[start..start + self.cols()])
    }

    /// Copies the matrix into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows())
            .filter_map(|i| self.row(i).ok())
            .map(<[T]>::to_vec)
            .collect()
    }
}
