use crate::{get_strides_from_shape, storage::TensorStorage, Tensor};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T, const N: usize> serde::Serialize for Tensor<T, N>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Tensor", 3)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("shape", &self.shape.to_vec())?;
        state.serialize_field("strides", &self.strides.to_vec())?;
        state.end()
    }
}

impl<'de, T, const N: usize> serde::Deserialize<'de> for Tensor<T, N>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TensorData<T> {
            data: Vec<T>,
            shape: Vec<usize>,
            strides: Vec<usize>,
        }

        let TensorData {
            data,
            shape,
            strides,
        } = TensorData::deserialize(deserializer)?;

        let shape_array: [usize; N] = shape
            .try_into()
            .map_err(|_| serde::de::Error::custom("Invalid shape"))?;

        let strides_array: [usize; N] = strides
            .try_into()
            .map_err(|_| serde::de::Error::custom("Invalid strides"))?;

        let numel = shape_array.iter().product::<usize>();
        if numel != data.len() {
            return Err(serde::de::Error::custom(format!(
                "expected {numel} elements for shape {shape_array:?}, got {}",
                data.len()
            )));
        }

        let expected_strides = get_strides_from_shape(shape_array);
        if strides_array != expected_strides {
            return Err(serde::de::Error::custom(format!(
                "expected row-major strides {expected_strides:?} for shape {shape_array:?}, got {strides_array:?}"
            )));
        }

        Ok(Tensor {
            storage: TensorStorage::from_vec(data),
            shape: shape_array,
            strides: strides_array,
        })
    }
}
