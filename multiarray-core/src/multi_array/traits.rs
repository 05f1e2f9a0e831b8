// src/multi_array/traits.rs

use super::MultiArray;
use std::fmt::{self, Debug, Display};
use std::ops::{Index, IndexMut};

// --- Trait Implementations ---

impl<T: PartialEq> PartialEq for MultiArray<T> {
    /// Two arrays are equal when their data and shape are equal. Strides are
    /// derived from the shape and take no part in the comparison.
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.shape == other.shape
    }
}

impl<T: Eq> Eq for MultiArray<T> {}

impl<T: Debug> Debug for MultiArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiArray")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Display> Display for MultiArray<T> {
    /// Prints the shape followed by one line per innermost row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MultiArray(shape={:?})", self.shape)?;
        let row_len = self.shape.last().copied().unwrap_or(0);
        if row_len == 0 {
            return Ok(());
        }
        for row in self.data.chunks(row_len) {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Full-coordinate indexing, `array[[i, j]]`.
///
/// Panics with the same message `get` would return as an error, in the way
/// slice indexing panics on an out-of-range position.
impl<T, const N: usize> Index<[isize; N]> for MultiArray<T> {
    type Output = T;

    fn index(&self, coords: [isize; N]) -> &T {
        match self.get(&coords) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, const N: usize> IndexMut<[isize; N]> for MultiArray<T> {
    fn index_mut(&mut self, coords: [isize; N]) -> &mut T {
        match self.element_offset(&coords) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}
