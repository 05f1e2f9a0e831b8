// src/view.rs

use std::ops::{Deref, DerefMut};

/// A borrowed, read-only run of contiguous elements taken from a
/// [`MultiArray`](crate::MultiArray) buffer.
///
/// A view remembers the flat offset (`start`) it was taken from so callers
/// can relate its elements back to positions in the owning buffer. It borrows
/// the array, so the array cannot be reshaped while the view is alive.
///
/// The sentinel returned by [`MultiArray::at`](crate::MultiArray::at) for
/// out-of-range coordinates is [`View::empty`].
#[derive(Debug, PartialEq, Eq)]
pub struct View<'a, T> {
    data: &'a [T],
    start: usize,
}

impl<'a, T> View<'a, T> {
    /// Wraps `data`, recording that it begins at flat offset `start`.
    pub fn new(data: &'a [T], start: usize) -> Self {
        View { data, start }
    }

    /// The empty sentinel view (start == end == 0).
    pub fn empty() -> Self {
        View { data: &[], start: 0 }
    }

    /// Flat offset of the first element in the owning buffer.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Flat offset one past the last element in the owning buffer.
    pub fn end(&self) -> usize {
        self.start + self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when `start == end`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First element of the run, or `None` for an empty view.
    pub fn front(&self) -> Option<&'a T> {
        self.data.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

// Manual impls: a shared view is copyable whatever `T` is.
impl<'a, T> Clone for View<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for View<'a, T> {}

impl<'a, T> Default for View<'a, T> {
    fn default() -> Self {
        View::empty()
    }
}

impl<'a, T> Deref for View<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, 'b, T> IntoIterator for &'b View<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// The read-write counterpart of [`View`].
///
/// Holds an exclusive borrow of the owning array for its whole lifetime.
#[derive(Debug, PartialEq, Eq)]
pub struct ViewMut<'a, T> {
    data: &'a mut [T],
    start: usize,
}

impl<'a, T> ViewMut<'a, T> {
    pub fn new(data: &'a mut [T], start: usize) -> Self {
        ViewMut { data, start }
    }

    /// The empty sentinel view (start == end == 0).
    pub fn empty() -> Self {
        ViewMut {
            data: Default::default(),
            start: 0,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.data.first_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Sets every element of the run to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Consumes the view, returning the borrowed slice with the full lifetime.
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }

    /// Reborrows as a read-only [`View`].
    pub fn as_view(&self) -> View<'_, T> {
        View::new(&*self.data, self.start)
    }
}

impl<'a, T> Default for ViewMut<'a, T> {
    fn default() -> Self {
        ViewMut::empty()
    }
}

impl<'a, T> Deref for ViewMut<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &*self.data
    }
}

impl<'a, T> DerefMut for ViewMut<'a, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<'a, T> IntoIterator for ViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
