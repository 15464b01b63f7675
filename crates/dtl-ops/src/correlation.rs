use dtl_kernels::{ops::patch_correlation_kernel, MulAccumulate};
use dtl_tensor::Tensor2;

use crate::{
    error::OpsError,
    parallel::{collect_indexed, ExecutionStrategy},
    shape::{correlation_shape, ensure_standard_layout},
};

/// Element types the correlation engine accepts.
///
/// Any [`MulAccumulate`] type that can be shared across threads.
pub trait CorrelationElement: MulAccumulate + Send + Sync {}

impl<T: MulAccumulate + Send + Sync> CorrelationElement for T {}

/// Valid-mode 2-D cross-correlation of a matrix with a kernel.
///
/// Equivalent to [`correlate2d_with`] using [`ExecutionStrategy::Serial`].
///
/// # Example
///
/// ```
/// use dtl_ops::correlate2d;
/// use dtl_tensor::Tensor2;
///
/// let m = Tensor2::<f32>::from_rows(&[
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0],
/// ])
/// .unwrap();
/// let k = Tensor2::<f32>::from_rows(&[vec![1.0, 0.0], vec![0.0, -1.0]]).unwrap();
///
/// let out = correlate2d(&m, &k, 1).unwrap();
/// assert_eq!(out.shape, [2, 2]);
/// assert_eq!(out.as_slice(), &[-4.0, -4.0, -4.0, -4.0]);
/// ```
pub fn correlate2d<T>(
    matrix: &Tensor2<T>,
    kernel: &Tensor2<T>,
    stride: usize,
) -> Result<Tensor2<T>, OpsError>
where
    T: CorrelationElement,
{
    correlate2d_with(matrix, kernel, stride, ExecutionStrategy::Serial)
}

/// Valid-mode 2-D cross-correlation with an explicit execution strategy.
///
/// For every output cell `(i, j)` the kernel is laid over the sub-grid whose top-left
/// corner is `(i * stride, j * stride)`; the element-wise products are summed in
/// row-major order of the sub-grid. The kernel is not flipped.
///
/// The output shape is `[(H - kH) / stride + 1, (W - kW) / stride + 1]`. An axis on which
/// the kernel is larger than the matrix has extent zero and the result is empty.
///
/// Cells are independent, so every strategy yields the same result; the summation
/// order inside a cell does not depend on the strategy.
///
/// Integer element types use wrapping arithmetic: a cell whose products or running
/// sum leave the range of `T` wraps around instead of panicking. Widen the element
/// type first when the exact sum is needed.
///
/// # Arguments
///
/// * `matrix` - The input matrix with shape `[H, W]`.
/// * `kernel` - The kernel with shape `[kH, kW]`.
/// * `stride` - Step between consecutive kernel positions on both axes.
/// * `strategy` - How output cells are distributed over threads.
///
/// # Errors
///
/// All checks run before the output is allocated:
///
/// * [`OpsError::InvalidParameter`] if `stride` is zero.
/// * [`OpsError::EmptyKernel`] if the kernel has no rows or no columns.
/// * [`OpsError::NonStandardLayout`] if either tensor is not row-major contiguous.
/// * [`OpsError::ParallelError`] if a fixed-size thread pool cannot be built.
pub fn correlate2d_with<T>(
    matrix: &Tensor2<T>,
    kernel: &Tensor2<T>,
    stride: usize,
    strategy: ExecutionStrategy,
) -> Result<Tensor2<T>, OpsError>
where
    T: CorrelationElement,
{
    let [out_rows, out_cols] = correlation_shape(matrix.shape, kernel.shape, stride)?;
    ensure_standard_layout(matrix)?;
    ensure_standard_layout(kernel)?;

    log::trace!(
        "correlating {:?} with kernel {:?}, stride {stride}, output [{out_rows}, {out_cols}], {strategy:?}",
        matrix.shape,
        kernel.shape,
    );

    let src = matrix.as_slice();
    let kernel_data = kernel.as_slice();

    let data = collect_indexed(strategy, out_rows * out_cols, |idx| {
        let origin = [(idx / out_cols) * stride, (idx % out_cols) * stride];
        patch_correlation_kernel(src, matrix.shape, origin, kernel_data, kernel.shape)
            .map_err(OpsError::from)
    })?;

    Ok(Tensor2::from_shape_vec([out_rows, out_cols], data)?)
}

/// Valid-mode 2-D cross-correlation over row-based input.
///
/// Both inputs are checked for rectangularity before anything is computed.
///
/// # Errors
///
/// * [`OpsError::TensorError`] wrapping [`dtl_tensor::TensorError::RaggedRows`] if a
///   matrix is not rectangular.
/// * Every error of [`correlate2d`].
///
/// # Example
///
/// ```
/// use dtl_ops::correlate2d_rows;
///
/// let m = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]];
/// let k = vec![vec![1, 1], vec![1, 1]];
/// let out: Vec<Vec<i32>> = correlate2d_rows(&m, &k, 2).unwrap();
/// assert_eq!(out, vec![vec![14, 22]]);
/// ```
pub fn correlate2d_rows<T, R>(
    matrix: &[R],
    kernel: &[R],
    stride: usize,
) -> Result<Vec<Vec<T>>, OpsError>
where
    R: AsRef<[T]>,
    T: CorrelationElement,
{
    let matrix = Tensor2::from_rows(matrix)?;
    let kernel = Tensor2::from_rows(kernel)?;
    Ok(correlate2d(&matrix, &kernel, stride)?.to_rows())
}
