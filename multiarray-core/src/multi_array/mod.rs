// src/multi_array/mod.rs

use crate::error::MultiArrayError;
use log::debug;

mod assign;
mod indexing;
mod traits;

pub mod utils;

use utils::{calculate_strides, numel};

/// A dense N-dimensional array stored in one flat, row-major buffer.
///
/// `MultiArray` owns its elements together with a `shape` and the `strides`
/// derived from it. The three fields are private and are only updated
/// together, so `data.len() == product(shape)` and
/// `strides.len() == shape.len()` hold after every operation.
///
/// Sub-ranges selected by a coordinate prefix are handed out as borrowed
/// [`View`](crate::View)s (see [`MultiArray::view`] and [`MultiArray::at`]).
///
/// # Example
/// ```
/// use multiarray_core::MultiArray;
///
/// let mut a = MultiArray::filled(&[2, 3], 0.0f32).unwrap();
/// *a.get_mut(&[1, 2]).unwrap() = 5.0;
/// assert_eq!(a.strides(), &[3, 1]);
/// assert_eq!(a.view(&[1]).unwrap().as_slice(), &[0.0, 0.0, 5.0]);
/// ```
#[derive(Clone, Default)]
pub struct MultiArray<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T> MultiArray<T> {
    /// Creates an array with no dimensions and no elements.
    pub fn new() -> Self {
        MultiArray {
            data: Vec::new(),
            shape: Vec::new(),
            strides: Vec::new(),
        }
    }

    /// Adopts `data` as the flattened, row-major contents of an array of
    /// the given `shape`.
    ///
    /// # Errors
    /// Returns `MultiArrayError::EmptyShape` if `shape` has no dimensions and
    /// `MultiArrayError::DataLengthMismatch` if `data.len()` is not the
    /// product of `shape`. `MultiArrayError::ShapeOverflow` if the element
    /// count or a stride does not fit in `usize`.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, MultiArrayError> {
        if shape.is_empty() {
            return Err(MultiArrayError::EmptyShape {
                operation: "from_vec".to_string(),
            });
        }
        let strides = calculate_strides(shape)?;
        if data.len() != numel(shape)? {
            return Err(MultiArrayError::DataLengthMismatch {
                data_len: data.len(),
                shape: shape.to_vec(),
            });
        }
        Ok(MultiArray {
            data,
            shape: shape.to_vec(),
            strides,
        })
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of dimensions.
    pub fn num_dims(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The flat row-major buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the flat buffer. Its length cannot change through
    /// a slice, so the shape invariant is preserved.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }
}

impl<T: Clone + Default> MultiArray<T> {
    /// Creates an array of the given shape with default-valued elements.
    ///
    /// # Errors
    /// Same as [`reshape`](Self::reshape).
    pub fn with_shape(shape: &[usize]) -> Result<Self, MultiArrayError> {
        let mut array = MultiArray::new();
        array.reshape(shape)?;
        Ok(array)
    }

    /// Creates an array of the given shape with every element set to `value`.
    pub fn filled(shape: &[usize], value: T) -> Result<Self, MultiArrayError> {
        let mut array = MultiArray::new();
        array.reshape_fill(shape, value)?;
        Ok(array)
    }

    /// Replaces the shape, recomputes the strides and resizes the buffer to
    /// the new element count.
    ///
    /// This is a layout change only: the buffer is resized in place, so the
    /// leading elements keep their flat positions (and therefore usually map
    /// to different coordinates) while new elements are `T::default()`.
    /// No relayout of existing data is attempted.
    ///
    /// Any outstanding [`View`](crate::View) borrows the array, so the
    /// compiler rejects a reshape while one is alive.
    ///
    /// # Errors
    /// Returns `MultiArrayError::EmptyShape` if `new_shape` has no
    /// dimensions and `MultiArrayError::ShapeOverflow` if its element count
    /// or a stride does not fit in `usize`. The array is left unchanged on
    /// error.
    pub fn reshape(&mut self, new_shape: &[usize]) -> Result<(), MultiArrayError> {
        if new_shape.is_empty() {
            return Err(MultiArrayError::EmptyShape {
                operation: "reshape".to_string(),
            });
        }
        let len = numel(new_shape)?;
        let strides = calculate_strides(new_shape)?;
        debug!("MultiArray: reshape {:?} -> {:?}", self.shape, new_shape);
        self.data.resize(len, T::default());
        self.shape = new_shape.to_vec();
        self.strides = strides;
        Ok(())
    }

    /// Same as [`reshape`](Self::reshape), then sets every element to `value`.
    pub fn reshape_fill(&mut self, new_shape: &[usize], value: T) -> Result<(), MultiArrayError> {
        self.reshape(new_shape)?;
        self.fill(value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "multi_array_test.rs"]
mod tests;
