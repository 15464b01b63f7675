use dtl_tensor::Tensor2;

use crate::error::OpsError;

/// Transposes a matrix.
///
/// Element `(i, j)` of the output is element `(j, i)` of the input and the output shape
/// is `[cols, rows]`. The result is an owned tensor in standard layout, whatever the
/// layout of the input.
///
/// # Example
///
/// ```
/// use dtl_ops::transpose2d;
/// use dtl_tensor::Tensor2;
///
/// let m = Tensor2::<i32>::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// let t = transpose2d(&m);
/// assert_eq!(t.shape, [3, 2]);
/// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
/// ```
pub fn transpose2d<T: Clone>(matrix: &Tensor2<T>) -> Tensor2<T> {
    log::trace!("transposing {:?}", matrix.shape);
    matrix.permute_axes([1, 0]).as_contiguous()
}

/// Transposes a matrix given as a sequence of rows.
///
/// An empty sequence transposes to an empty sequence. A matrix with rows but no
/// columns also transposes to an empty sequence.
///
/// # Errors
///
/// Returns [`OpsError::TensorError`] if the rows do not all have the same length.
///
/// # Example
///
/// ```
/// use dtl_ops::transpose2d_rows;
///
/// let rows = vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']];
/// let t = transpose2d_rows(&rows).unwrap();
/// assert_eq!(t, vec![vec!['a', 'c', 'e'], vec!['b', 'd', 'f']]);
/// ```
pub fn transpose2d_rows<T, R>(rows: &[R]) -> Result<Vec<Vec<T>>, OpsError>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let matrix = Tensor2::from_rows(rows)?;
    Ok(transpose2d(&matrix).to_rows())
}
