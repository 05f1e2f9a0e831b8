//! Dense, row-major multi-dimensional arrays.
//!
//! [`MultiArray`] stores its elements in one flat buffer addressed through a
//! stride table derived from its shape. A coordinate prefix selects a
//! contiguous slab of that buffer, which is handed out as a borrowed
//! [`View`] / [`ViewMut`] without copying.

pub mod error;
pub mod multi_array;
pub mod view;

pub use error::MultiArrayError;
pub use multi_array::MultiArray;
pub use view::{View, ViewMut};

// Re-export traits required by public functions
pub use num_traits;
