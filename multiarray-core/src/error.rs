use thiserror::Error;

/// Error type for every fallible `MultiArray` operation.
///
/// Each variant carries the shape (and coordinates, where relevant) that
/// triggered the failure so the message is diagnosable on its own.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum MultiArrayError {
    #[error("{operation} called with an empty shape")]
    EmptyShape { operation: String },

    #[error("get({coords:?}) called with shape {shape:?}")]
    RankMismatch { coords: Vec<isize>, shape: Vec<usize> },

    #[error("index {coords:?} has more coordinates than dimensions in shape {shape:?}")]
    TooManyCoordinates { coords: Vec<isize>, shape: Vec<usize> },

    #[error("Index out of bounds: coordinates {coords:?} for shape {shape:?}")]
    IndexOutOfBounds { coords: Vec<isize>, shape: Vec<usize> },

    #[error("Array creation error: data length {data_len} does not match shape {shape:?}")]
    DataLengthMismatch { data_len: usize, shape: Vec<usize> },

    #[error("Shape {shape:?} describes more elements than fit in usize")]
    ShapeOverflow { shape: Vec<usize> },

    #[error("Element at flat index {index} cannot be represented in the target type")]
    ConversionFailed { index: usize },
}
