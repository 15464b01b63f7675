//! Output-shape rules for valid-mode windowing.
//!
//! Both the 1-D window extractor and the 2-D correlation engine size their output
//! with the same rule: along an axis of length `len`, a window of `window` elements
//! moved by `step` fits `floor((len - window) / step) + 1` times, and zero times when
//! `len < window`.

use dtl_tensor::Tensor;

use crate::error::OpsError;

/// Returns `value` if it is positive, otherwise an [`OpsError::InvalidParameter`].
///
/// # Example
///
/// ```
/// use dtl_ops::shape::ensure_positive;
///
/// assert_eq!(ensure_positive("size", 3).unwrap(), 3);
/// assert!(ensure_positive("size", 0).is_err());
/// ```
pub fn ensure_positive(name: &'static str, value: usize) -> Result<usize, OpsError> {
    if value == 0 {
        return Err(OpsError::InvalidParameter { name, value });
    }
    Ok(value)
}

/// Rejects tensors whose strides are not the row-major strides of their shape.
///
/// Operations that read the flat buffer directly call this first.
pub(crate) fn ensure_standard_layout<T, const N: usize>(
    tensor: &Tensor<T, N>,
) -> Result<(), OpsError> {
    if !tensor.is_standard_layout() {
        return Err(OpsError::NonStandardLayout {
            shape: tensor.shape.to_vec(),
            strides: tensor.strides.to_vec(),
        });
    }
    Ok(())
}

/// Number of valid window positions along one axis.
///
/// `step` must be positive; callers validate it first.
#[inline]
fn valid_extent(len: usize, window: usize, step: usize) -> usize {
    if len < window {
        return 0;
    }
    (len - window) / step + 1
}

/// Computes the number of windows of `size` elements, `shift` apart, in a sequence.
///
/// A sequence shorter than `size` has no windows; this is not an error.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `size` or `shift` is zero.
///
/// # Example
///
/// ```
/// use dtl_ops::shape::window_count;
///
/// assert_eq!(window_count(6, 3, 2).unwrap(), 2);
/// assert_eq!(window_count(10, 4, 3).unwrap(), 3);
/// assert_eq!(window_count(2, 3, 1).unwrap(), 0);
/// ```
pub fn window_count(len: usize, size: usize, shift: usize) -> Result<usize, OpsError> {
    let size = ensure_positive("size", size)?;
    let shift = ensure_positive("shift", shift)?;

    let count = valid_extent(len, size, shift);
    if count == 0 {
        log::debug!("window size {size} exceeds sequence length {len}, no windows");
    }
    Ok(count)
}

/// Computes the number of elements of one window after within-window striding.
///
/// Equals `ceil(size / stride)`, independently of where the window sits.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `size` or `stride` is zero.
pub fn window_len(size: usize, stride: usize) -> Result<usize, OpsError> {
    let size = ensure_positive("size", size)?;
    let stride = ensure_positive("stride", stride)?;
    Ok(dtl_kernels::ops::strided_len(size, stride)?)
}

/// Computes the `[rows, cols]` shape of a valid-mode cross-correlation.
///
/// An axis along which the input is smaller than the kernel gets extent zero, so the
/// result is an empty matrix rather than an error.
///
/// # Arguments
///
/// * `input` - Input matrix shape as `[rows, cols]`.
/// * `kernel` - Kernel shape as `[rows, cols]`.
/// * `stride` - Step between consecutive kernel positions, on both axes.
///
/// # Errors
///
/// * [`OpsError::InvalidParameter`] if `stride` is zero.
/// * [`OpsError::EmptyKernel`] if the kernel has no rows or no columns.
///
/// # Example
///
/// ```
/// use dtl_ops::shape::correlation_shape;
///
/// assert_eq!(correlation_shape([3, 3], [2, 2], 1).unwrap(), [2, 2]);
/// assert_eq!(correlation_shape([6, 4], [2, 2], 2).unwrap(), [3, 2]);
/// assert_eq!(correlation_shape([2, 5], [3, 1], 1).unwrap(), [0, 5]);
/// ```
pub fn correlation_shape(
    input: [usize; 2],
    kernel: [usize; 2],
    stride: usize,
) -> Result<[usize; 2], OpsError> {
    let stride = ensure_positive("stride", stride)?;
    if kernel.contains(&0) {
        return Err(OpsError::EmptyKernel(kernel));
    }

    let out = [
        valid_extent(input[0], kernel[0], stride),
        valid_extent(input[1], kernel[1], stride),
    ];
    if out.contains(&0) {
        log::debug!("kernel {kernel:?} does not fit input {input:?}, output shape {out:?}");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count_exact_fit() -> Result<(), OpsError> {
        assert_eq!(window_count(6, 6, 1)?, 1);
        assert_eq!(window_count(6, 2, 2)?, 3);
        assert_eq!(window_count(7, 2, 2)?, 3);
        Ok(())
    }

    #[test]
    fn test_window_count_empty() -> Result<(), OpsError> {
        assert_eq!(window_count(0, 1, 1)?, 0);
        assert_eq!(window_count(5, 6, 1)?, 0);
        Ok(())
    }

    #[test]
    fn test_window_count_invalid() {
        assert_eq!(
            window_count(5, 0, 1),
            Err(OpsError::InvalidParameter {
                name: "size",
                value: 0
            })
        );
        assert_eq!(
            window_count(5, 1, 0),
            Err(OpsError::InvalidParameter {
                name: "shift",
                value: 0
            })
        );
    }

    #[test]
    fn test_window_len() -> Result<(), OpsError> {
        assert_eq!(window_len(3, 1)?, 3);
        assert_eq!(window_len(3, 2)?, 2);
        assert_eq!(window_len(3, 5)?, 1);
        assert!(window_len(3, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_correlation_shape() -> Result<(), OpsError> {
        assert_eq!(correlation_shape([5, 7], [3, 3], 1)?, [3, 5]);
        assert_eq!(correlation_shape([5, 7], [3, 3], 2)?, [2, 3]);
        assert_eq!(correlation_shape([3, 3], [3, 3], 4)?, [1, 1]);
        Ok(())
    }

    #[test]
    fn test_correlation_shape_kernel_too_large() -> Result<(), OpsError> {
        assert_eq!(correlation_shape([2, 2], [3, 3], 1)?, [0, 0]);
        assert_eq!(correlation_shape([4, 2], [3, 3], 1)?, [2, 0]);
        Ok(())
    }

    #[test]
    fn test_ensure_standard_layout() -> Result<(), OpsError> {
        let mut t = dtl_tensor::Tensor1::<u8>::from_shape_vec([4], vec![1, 2, 3, 4])?;
        assert!(ensure_standard_layout(&t).is_ok());
        t.strides = [2];
        assert_eq!(
            ensure_standard_layout(&t),
            Err(OpsError::NonStandardLayout {
                shape: vec![4],
                strides: vec![2]
            })
        );
        Ok(())
    }

    #[test]
    fn test_correlation_shape_invalid() {
        assert_eq!(
            correlation_shape([3, 3], [2, 2], 0),
            Err(OpsError::InvalidParameter {
                name: "stride",
                value: 0
            })
        );
        assert_eq!(
            correlation_shape([3, 3], [0, 2], 1),
            Err(OpsError::EmptyKernel([0, 2]))
        );
    }
}
