// src/multi_array/indexing.rs

use super::utils::{coords_in_range, prefix_range};
use super::MultiArray;
use crate::error::MultiArrayError;
use crate::view::{View, ViewMut};
use log::trace;

/// Coordinate-based access.
///
/// Coordinates are signed so that neighbour lookups such as `[t - 1, d]` can
/// be asked of [`in_range`](MultiArray::in_range) and [`at`](MultiArray::at)
/// without wrapping. Negative coordinates are always out of range.
impl<T> MultiArray<T> {
    /// Returns true if `coords` has at most `num_dims()` entries and each
    /// entry lies in `[0, shape[i])`.
    pub fn in_range(&self, coords: &[isize]) -> bool {
        coords_in_range(coords, &self.shape)
    }

    /// Flat offset of the first element selected by a coordinate prefix.
    ///
    /// # Errors
    /// Same as [`view`](Self::view).
    pub fn offset_of(&self, coords: &[isize]) -> Result<usize, MultiArrayError> {
        prefix_range(coords, &self.shape, &self.strides).map(|(start, _)| start)
    }

    /// Returns a reference to the single element addressed by a full
    /// coordinate.
    ///
    /// # Errors
    /// `MultiArrayError::RankMismatch` if `coords.len() != num_dims()`,
    /// `MultiArrayError::IndexOutOfBounds` if a coordinate is outside its axis.
    pub fn get(&self, coords: &[isize]) -> Result<&T, MultiArrayError> {
        let start = self.element_offset(coords)?;
        Ok(&self.data[start])
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, coords: &[isize]) -> Result<&mut T, MultiArrayError> {
        let start = self.element_offset(coords)?;
        Ok(&mut self.data[start])
    }

    /// Returns a view over the contiguous slab selected by a coordinate
    /// prefix.
    ///
    /// With no coordinates the view covers the whole buffer. With `k`
    /// coordinates it starts at `Σ coords[i] * strides[i]` and has
    /// `strides[k - 1]` elements; under row-major layout every element whose
    /// leading coordinates equal `coords` lies in that run.
    ///
    /// # Errors
    /// `MultiArrayError::TooManyCoordinates` if `coords.len() > num_dims()`,
    /// `MultiArrayError::IndexOutOfBounds` if a coordinate is outside its axis.
    ///
    /// # Example
    /// ```
    /// use multiarray_core::MultiArray;
    ///
    /// let a = MultiArray::from_vec((0..6).collect::<Vec<i32>>(), &[2, 3]).unwrap();
    /// let row = a.view(&[1]).unwrap();
    /// assert_eq!((row.start(), row.end()), (3, 6));
    /// assert_eq!(row.as_slice(), &[3, 4, 5]);
    /// ```
    pub fn view(&self, coords: &[isize]) -> Result<View<'_, T>, MultiArrayError> {
        let (start, end) = prefix_range(coords, &self.shape, &self.strides)?;
        Ok(View::new(&self.data[start..end], start))
    }

    /// Mutable counterpart of [`view`](Self::view).
    pub fn view_mut(&mut self, coords: &[isize]) -> Result<ViewMut<'_, T>, MultiArrayError> {
        let (start, end) = prefix_range(coords, &self.shape, &self.strides)?;
        Ok(ViewMut::new(&mut self.data[start..end], start))
    }

    /// Tolerant form of [`view`](Self::view): returns the same view when
    /// `in_range(coords)` holds and the empty sentinel view otherwise.
    ///
    /// Callers must check [`View::is_empty`] before using the result.
    pub fn at(&self, coords: &[isize]) -> View<'_, T> {
        match prefix_range(coords, &self.shape, &self.strides) {
            Ok((start, end)) => View::new(&self.data[start..end], start),
            Err(err) => {
                trace!("MultiArray: at({:?}) -> empty view: {}", coords, err);
                View::empty()
            }
        }
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, coords: &[isize]) -> ViewMut<'_, T> {
        match prefix_range(coords, &self.shape, &self.strides) {
            Ok((start, end)) => ViewMut::new(&mut self.data[start..end], start),
            Err(err) => {
                trace!("MultiArray: at_mut({:?}) -> empty view: {}", coords, err);
                ViewMut::empty()
            }
        }
    }

    /// Flat offset of a full coordinate, checked against rank and bounds.
    pub(crate) fn element_offset(&self, coords: &[isize]) -> Result<usize, MultiArrayError> {
        if coords.len() != self.shape.len() {
            return Err(MultiArrayError::RankMismatch {
                coords: coords.to_vec(),
                shape: self.shape.clone(),
            });
        }
        let (start, end) = prefix_range(coords, &self.shape, &self.strides)?;
        // A dimensionless array has no element to address.
        if start >= end {
            return Err(MultiArrayError::IndexOutOfBounds {
                coords: coords.to_vec(),
                shape: self.shape.clone(),
            });
        }
        Ok(start)
    }
}

#[cfg(test)]
#[path = "indexing_test.rs"]
mod tests;
