use crate::{get_strides_from_shape, storage::TensorStorage, Tensor};

/// A non-owning view into tensor data.
///
/// `TensorView` borrows the storage of a [`Tensor`] with its own shape and stride
/// information. Views make axis permutation free; [`TensorView::as_contiguous`]
/// materializes the permuted layout into a new owned tensor.
///
/// # Examples
///
/// ```rust
/// use dtl_tensor::Tensor2;
///
/// let tensor = Tensor2::<i32>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
///
/// // permute creates a non-contiguous view
/// let view = tensor.permute_axes([1, 0]);
///
/// // convert to an owned contiguous tensor
/// let contiguous = view.as_contiguous();
/// assert_eq!(contiguous.as_slice(), &[1, 3, 2, 4]);
/// ```
pub struct TensorView<'a, T, const N: usize> {
    /// Reference to the storage held by another tensor.
    pub storage: &'a TensorStorage<T>,

    /// The shape of the tensor view.
    pub shape: [usize; N],

    /// The strides for accessing elements in the view.
    pub strides: [usize; N],
}

impl<T, const N: usize> TensorView<'_, T, N> {
    /// Returns the total number of elements visible through the view.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Gets the element at the given index, or `None` when out of bounds.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        let mut offset = 0;
        for ((&idx, &dim_size), &stride) in index
            .iter()
            .zip(self.shape.iter())
            .zip(self.strides.iter())
        {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        self.storage.as_slice().get(offset)
    }

    /// Converts the view to an owned tensor with contiguous row-major layout.
    ///
    /// Elements are visited in the row-major order of the view's shape and read
    /// through the view's strides.
    pub fn as_contiguous(&self) -> Tensor<T, N>
    where
        T: Clone,
    {
        let total_elems = self.numel();
        let slice = self.storage.as_slice();
        let mut flat = Vec::with_capacity(total_elems);
        let mut idx = [0; N];

        for _ in 0..total_elems {
            let offset = idx
                .iter()
                .zip(self.strides.iter())
                .map(|(&i, &s)| i * s)
                .sum::<usize>();

            flat.push(slice[offset].clone());

            // increment index
            for dim in (0..N).rev() {
                idx[dim] += 1;
                if idx[dim] < self.shape[dim] {
                    break;
                }
                idx[dim] = 0;
            }
        }

        Tensor {
            storage: TensorStorage::from_vec(flat),
            shape: self.shape,
            strides: get_strides_from_shape(self.shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Tensor, Tensor2, TensorError};

    #[test]
    fn test_view_identity() -> Result<(), TensorError> {
        let t = Tensor2::<u8>::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6])?;
        let view = t.permute_axes([0, 1]);
        assert_eq!(view.numel(), 6);
        assert_eq!(view.get([1, 1]), Some(&5));
        assert!(view.get([2, 0]).is_none());
        assert_eq!(view.as_contiguous(), t);
        Ok(())
    }

    #[test]
    fn test_permute_as_contiguous() -> Result<(), TensorError> {
        let t = Tensor2::<u8>::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6])?;
        let t2 = t.permute_axes([1, 0]).as_contiguous();
        assert_eq!(t2.shape, [3, 2]);
        assert_eq!(t2.strides, [2, 1]);
        assert_eq!(t2.as_slice(), &[1, 4, 2, 5, 3, 6]);
        Ok(())
    }

    #[test]
    fn test_permute_3d() -> Result<(), TensorError> {
        let t = Tensor::<usize, 3>::from_shape_vec([2, 1, 3], (0..6).collect())?;
        let t2 = t.permute_axes([2, 0, 1]).as_contiguous();
        assert_eq!(t2.shape, [3, 2, 1]);
        assert_eq!(t2.as_slice(), &[0, 3, 1, 4, 2, 5]);
        Ok(())
    }

    #[test]
    fn test_empty_view() -> Result<(), TensorError> {
        let t = Tensor2::<f32>::from_shape_vec([0, 4], vec![])?;
        let t2 = t.permute_axes([1, 0]).as_contiguous();
        assert_eq!(t2.shape, [4, 0]);
        assert!(t2.is_empty());
        Ok(())
    }
}
