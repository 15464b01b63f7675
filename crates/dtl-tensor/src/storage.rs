//! Owned element storage for tensors.
//!
//! The storage is a plain heap buffer. Every operation in the workspace returns a
//! freshly allocated tensor, so the buffer is never shared between tensors.

/// The owned, contiguous buffer backing a [`crate::Tensor`].
#[derive(Clone, Debug, PartialEq)]
pub struct TensorStorage<T> {
    data: Vec<T>,
}

impl<T> TensorStorage<T> {
    /// Creates a new storage taking ownership of a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the storage data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the number of elements in the storage.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the storage holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_from_vec() {
        let storage = TensorStorage::from_vec(vec![1u8, 2, 3, 4]);
        assert_eq!(storage.len(), 4);
        assert!(!storage.is_empty());
        assert_eq!(storage.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_storage_empty() {
        let storage = TensorStorage::<f64>::from_vec(Vec::new());
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
    }
}
