use std::iter::StepBy;
use std::slice::Iter;

use dtl_kernels::ops::strided_gather_kernel;
use dtl_tensor::{Tensor1, Tensor2};

use crate::{
    error::OpsError,
    shape::{self, ensure_standard_layout},
};

/// Parameters of a strided sliding window over a 1-D sequence.
///
/// * `size` - number of consecutive source elements a window spans.
/// * `shift` - distance between the start positions of consecutive windows.
/// * `stride` - subsampling step applied inside each window.
///
/// All three must be positive. [`WindowSpec::new`] defaults `shift` and `stride` to 1.
///
/// # Example
///
/// ```
/// use dtl_ops::WindowSpec;
///
/// let spec = WindowSpec::new(4).with_shift(2).with_stride(3);
/// assert_eq!(spec.num_windows(9).unwrap(), 3);
/// assert_eq!(spec.window_len().unwrap(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSpec {
    /// Number of consecutive elements spanned by a window.
    pub size: usize,
    /// Distance between the starts of consecutive windows.
    pub shift: usize,
    /// Subsampling step inside a window.
    pub stride: usize,
}

impl WindowSpec {
    /// Creates a window of `size` elements with unit shift and stride.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            shift: 1,
            stride: 1,
        }
    }

    /// Sets the distance between consecutive windows.
    pub fn with_shift(mut self, shift: usize) -> Self {
        self.shift = shift;
        self
    }

    /// Sets the subsampling step inside a window.
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Checks that size, shift and stride are all positive.
    pub fn validate(&self) -> Result<(), OpsError> {
        shape::ensure_positive("size", self.size)?;
        shape::ensure_positive("shift", self.shift)?;
        shape::ensure_positive("stride", self.stride)?;
        Ok(())
    }

    /// Number of windows this spec produces over a sequence of `len` elements.
    pub fn num_windows(&self, len: usize) -> Result<usize, OpsError> {
        self.validate()?;
        shape::window_count(len, self.size, self.shift)
    }

    /// Number of elements in every window, `ceil(size / stride)`.
    pub fn window_len(&self) -> Result<usize, OpsError> {
        self.validate()?;
        shape::window_len(self.size, self.stride)
    }
}

/// Borrowing iterator over the windows of a sequence.
///
/// Each item walks the strided elements of one window without copying them.
/// Created by [`windows_iter`].
#[derive(Debug, Clone)]
pub struct Windows<'a, T> {
    data: &'a [T],
    spec: WindowSpec,
    next: usize,
    count: usize,
}

impl<'a, T> Iterator for Windows<'a, T> {
    type Item = StepBy<Iter<'a, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let start = self.next * self.spec.shift;
        self.next += 1;
        Some(
            self.data[start..start + self.spec.size]
                .iter()
                .step_by(self.spec.stride),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Windows<'_, T> {}

/// Returns a lazy iterator over the windows of `data`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `spec` has a zero size, shift or stride.
///
/// # Example
///
/// ```
/// use dtl_ops::{windows_iter, WindowSpec};
///
/// let data = [1, 2, 3, 4, 5, 6, 7];
/// let sums: Vec<i32> = windows_iter(&data, WindowSpec::new(3).with_shift(2))
///     .unwrap()
///     .map(|w| w.sum())
///     .collect();
/// assert_eq!(sums, vec![6, 12, 18]);
/// ```
pub fn windows_iter<T>(data: &[T], spec: WindowSpec) -> Result<Windows<'_, T>, OpsError> {
    let count = spec.num_windows(data.len())?;
    Ok(Windows {
        data,
        spec,
        next: 0,
        count,
    })
}

/// Extracts strided sliding windows from a sequence.
///
/// Window `i` is made of the elements `i * shift + k * stride` for every `k` with
/// `k * stride < size`. Windows are produced while `i * shift + size <= data.len()`,
/// so each window has exactly `ceil(size / stride)` elements and a sequence shorter
/// than `size` yields no windows. Elements are copied; the result does not borrow
/// `data`.
///
/// # Arguments
///
/// * `data` - The source sequence.
/// * `spec` - Window size, shift and stride.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `spec` has a zero size, shift or stride. Nothing is
/// allocated in that case.
///
/// # Example
///
/// ```
/// use dtl_ops::{window1d, WindowSpec};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let windows = window1d(&data, WindowSpec::new(3).with_shift(2)).unwrap();
/// assert_eq!(windows, vec![vec![1.0, 2.0, 3.0], vec![3.0, 4.0, 5.0]]);
/// ```
pub fn window1d<T: Clone>(data: &[T], spec: WindowSpec) -> Result<Vec<Vec<T>>, OpsError> {
    let count = spec.num_windows(data.len())?;
    log::trace!("extracting {count} windows from {} elements with {spec:?}", data.len());

    let windows = (0..count)
        .map(|i| strided_gather_kernel(data, i * spec.shift, spec.size, spec.stride))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(windows)
}

/// Extracts strided sliding windows from a 1-D tensor into a window matrix.
///
/// Row `i` of the result is window `i` as defined by [`window1d`]; the result shape is
/// `[num_windows, ceil(size / stride)]`.
///
/// # Errors
///
/// * [`OpsError::InvalidParameter`] if `spec` has a zero size, shift or stride.
/// * [`OpsError::NonStandardLayout`] if the tensor is not contiguous.
///
/// # Example
///
/// ```
/// use dtl_ops::{window1d_tensor, WindowSpec};
/// use dtl_tensor::Tensor1;
///
/// let t = Tensor1::<i32>::from_shape_vec([7], (1..=7).collect()).unwrap();
/// let w = window1d_tensor(&t, WindowSpec::new(5).with_shift(2).with_stride(2)).unwrap();
/// assert_eq!(w.shape, [2, 3]);
/// assert_eq!(w.as_slice(), &[1, 3, 5, 3, 5, 7]);
/// ```
pub fn window1d_tensor<T: Clone>(
    tensor: &Tensor1<T>,
    spec: WindowSpec,
) -> Result<Tensor2<T>, OpsError> {
    ensure_standard_layout(tensor)?;
    let data = tensor.as_slice();
    let count = spec.num_windows(data.len())?;
    let len = spec.window_len()?;

    let mut flat = Vec::with_capacity(count * len);
    for window in windows_iter(data, spec)? {
        flat.extend(window.cloned());
    }

    Ok(Tensor2::from_shape_vec([count, len], flat)?)
}
