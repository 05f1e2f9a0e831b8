// src/multi_array/assign.rs

use super::MultiArray;
use crate::error::MultiArrayError;
use log::debug;
use num_traits::NumCast;

/// Cross-type assignment.
///
/// `assign` accepts any element type with a lossless `Into<T>` conversion, so
/// mismatched types are rejected at compile time. Narrowing numeric
/// conversions go through `try_assign`, which reports the first element that
/// does not fit.
impl<T> MultiArray<T> {
    /// Reshapes `self` to `other`'s shape and copies every element,
    /// converting `U -> T`.
    ///
    /// A dimensionless `other` (see [`MultiArray::new`]) leaves `self`
    /// dimensionless and empty.
    ///
    /// # Example
    /// ```
    /// use multiarray_core::MultiArray;
    ///
    /// let src = MultiArray::from_vec(vec![1u8, 2, 3, 4], &[2, 2]).unwrap();
    /// let mut dst: MultiArray<f64> = MultiArray::new();
    /// dst.assign(&src);
    /// assert_eq!(dst.shape(), &[2, 2]);
    /// assert_eq!(dst.data(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn assign<U>(&mut self, other: &MultiArray<U>)
    where
        U: Clone + Into<T>,
    {
        debug!("MultiArray: assign from shape {:?}", other.shape);
        self.data = other.data.iter().cloned().map(Into::into).collect();
        self.shape = other.shape.clone();
        self.strides = other.strides.clone();
    }

    /// Like [`assign`](Self::assign), for numeric conversions that may lose
    /// range (`f64 -> f32`, `i64 -> u8`, ...).
    ///
    /// # Errors
    /// Returns `MultiArrayError::ConversionFailed` with the flat index of the
    /// first element that cannot be represented as `T`. `self` is left
    /// unchanged on error.
    pub fn try_assign<U>(&mut self, other: &MultiArray<U>) -> Result<(), MultiArrayError>
    where
        U: Copy + NumCast,
        T: NumCast,
    {
        debug!("MultiArray: try_assign from shape {:?}", other.shape);
        let converted = other
            .data
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                <T as NumCast>::from(value).ok_or(MultiArrayError::ConversionFailed { index })
            })
            .collect::<Result<Vec<T>, _>>()?;
        self.data = converted;
        self.shape = other.shape.clone();
        self.strides = other.strides.clone();
        Ok(())
    }
}

impl<T, U> From<&MultiArray<U>> for MultiArray<T>
where
    U: Clone + Into<T>,
{
    fn from(other: &MultiArray<U>) -> Self {
        let mut array = MultiArray::new();
        array.assign(other);
        array
    }
}

#[cfg(test)]
#[path = "assign_test.rs"]
mod tests;
