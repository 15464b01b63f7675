use crate::error::KernelError;
use num_traits::Zero;

/// Element types accepted by the multiply-accumulate kernels.
///
/// Integer types use two's-complement wrapping arithmetic, so a product or sum that
/// leaves the range of the type wraps around in debug and release builds alike. Float
/// types use plain IEEE-754 multiplication and addition, rounded after each step.
pub trait MulAccumulate: Zero + Copy {
    /// Returns `self + a * b`.
    fn mul_acc(self, a: Self, b: Self) -> Self;
}

macro_rules! impl_mul_accumulate_wrapping {
    ($($t:ty),*) => {
        $(
            impl MulAccumulate for $t {
                #[inline]
                fn mul_acc(self, a: Self, b: Self) -> Self {
                    self.wrapping_add(a.wrapping_mul(b))
                }
            }
        )*
    };
}

macro_rules! impl_mul_accumulate_float {
    ($($t:ty),*) => {
        $(
            impl MulAccumulate for $t {
                #[inline]
                fn mul_acc(self, a: Self, b: Self) -> Self {
                    self + a * b
                }
            }
        )*
    };
}

impl_mul_accumulate_wrapping!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_mul_accumulate_float!(f32, f64);

/// Multiplies two slices element-wise and adds the products to `init`, left to right.
///
/// This is the accumulation primitive shared by the other kernels. The products are
/// added one at a time in slice order, so chaining calls over consecutive rows keeps a
/// single row-major summation order. Integer overflow wraps, see [`MulAccumulate`].
///
/// # Errors
///
/// If the lengths of the slices don't match, a `LengthMismatch` error is returned.
///
/// Example:
/// ```
/// use dtl_kernels::ops::mul_accumulate_kernel;
///
/// let acc = mul_accumulate_kernel(10, &[1, 2], &[3, 4]).unwrap();
/// assert_eq!(acc, 21); // 10 + 1*3 + 2*4
///
/// let wrapped = mul_accumulate_kernel(0u8, &[16], &[16]).unwrap();
/// assert_eq!(wrapped, 0);
/// ```
pub fn mul_accumulate_kernel<T: MulAccumulate>(init: T, a: &[T], b: &[T]) -> Result<T, KernelError> {
    if a.len() != b.len() {
        return Err(KernelError::LengthMismatch(a.len(), b.len()));
    }

    let result = a
        .iter()
        .zip(b.iter())
        .fold(init, |acc, (a_val, b_val)| acc.mul_acc(*a_val, *b_val));

    Ok(result)
}

/// Number of elements produced by taking every `step`-th element of a region of `len`.
///
/// Equals `ceil(len / step)`.
///
/// # Errors
///
/// `ZeroStep` if `step == 0`, as for [`strided_gather_kernel`].
///
/// Example:
/// ```
/// use dtl_kernels::ops::strided_len;
///
/// assert_eq!(strided_len(3, 1).unwrap(), 3);
/// assert_eq!(strided_len(5, 2).unwrap(), 3);
/// assert_eq!(strided_len(4, 4).unwrap(), 1);
/// assert!(strided_len(4, 0).is_err());
/// ```
#[inline]
pub fn strided_len(len: usize, step: usize) -> Result<usize, KernelError> {
    if step == 0 {
        return Err(KernelError::ZeroStep);
    }
    Ok(len.div_ceil(step))
}

/// Copies every `step`-th element of the region `src[start..start + len]`.
///
/// The region length is fixed by `len`; the step only subsamples it and never extends
/// it. The output therefore always has `ceil(len / step)` elements.
///
/// # Arguments
///
/// * `src` - The source buffer.
/// * `start` - First element of the region.
/// * `len` - Length of the contiguous region before subsampling.
/// * `step` - Subsampling step inside the region.
///
/// # Errors
///
/// * `ZeroStep` if `step == 0`.
/// * `OutOfBounds` if the region does not fit inside `src`.
///
/// Example:
/// ```
/// use dtl_kernels::ops::strided_gather_kernel;
///
/// let src = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(strided_gather_kernel(&src, 1, 5, 2).unwrap(), vec![2, 4, 6]);
/// ```
pub fn strided_gather_kernel<T: Clone>(
    src: &[T],
    start: usize,
    len: usize,
    step: usize,
) -> Result<Vec<T>, KernelError> {
    if step == 0 {
        return Err(KernelError::ZeroStep);
    }

    let end = start
        .checked_add(len)
        .filter(|&end| end <= src.len())
        .ok_or(KernelError::OutOfBounds {
            start,
            end: start.saturating_add(len),
            len: src.len(),
        })?;

    Ok(src[start..end].iter().step_by(step).cloned().collect())
}

/// Cross-correlates one patch of a row-major grid with a kernel.
///
/// The patch has the shape of the kernel and its top-left corner at `origin`. The
/// products `src[origin + (r, c)] * kernel[(r, c)]` are summed in row-major order of
/// the patch. The kernel is not flipped.
///
/// # Arguments
///
/// * `src` - Row-major source grid data.
/// * `src_shape` - Source grid shape as `[rows, cols]`.
/// * `origin` - Top-left corner of the patch as `[row, col]`.
/// * `kernel` - Row-major kernel data.
/// * `kernel_shape` - Kernel shape as `[rows, cols]`.
///
/// # Errors
///
/// * `LengthMismatch` if a data slice does not match its shape.
/// * `PatchOutOfBounds` if the patch does not fit inside the source grid.
///
/// Example:
/// ```
/// use dtl_kernels::ops::patch_correlation_kernel;
///
/// let src = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let kernel = [1, 0, 0, -1];
/// let v = patch_correlation_kernel(&src, [3, 3], [1, 1], &kernel, [2, 2]).unwrap();
/// assert_eq!(v, 5 - 9);
/// ```
pub fn patch_correlation_kernel<T>(
    src: &[T],
    src_shape: [usize; 2],
    origin: [usize; 2],
    kernel: &[T],
    kernel_shape: [usize; 2],
) -> Result<T, KernelError>
where
    T: MulAccumulate,
{
    let [rows, cols] = src_shape;
    let [k_rows, k_cols] = kernel_shape;
    let [top, left] = origin;

    if src.len() != rows * cols {
        return Err(KernelError::LengthMismatch(src.len(), rows * cols));
    }
    if kernel.len() != k_rows * k_cols {
        return Err(KernelError::LengthMismatch(kernel.len(), k_rows * k_cols));
    }
    if top + k_rows > rows || left + k_cols > cols {
        return Err(KernelError::PatchOutOfBounds {
            origin,
            patch: kernel_shape,
            shape: src_shape,
        });
    }
    if k_cols == 0 {
        return Ok(T::zero());
    }

    kernel
        .chunks_exact(k_cols)
        .enumerate()
        .try_fold(T::zero(), |acc, (r, kernel_row)| {
            let start = (top + r) * cols + left;
            mul_accumulate_kernel(acc, &src[start..start + k_cols], kernel_row)
        })
}
