use crate::error::MultiArrayError;

/// Calculates the row-major strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
///
/// Strides are defined even when an axis is zero, so `[0, usize::MAX, 2]`
/// overflows although it holds no elements.
pub fn calculate_strides(shape: &[usize]) -> Result<Vec<usize>, MultiArrayError> {
    if shape.is_empty() {
        return Ok(vec![]);
    }
    let rank = shape.len();
    let mut strides = vec![1usize; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1]
            .checked_mul(shape[i + 1])
            .ok_or_else(|| shape_overflow(shape))?;
    }
    Ok(strides)
}

/// Total number of elements described by `shape`.
pub fn numel(shape: &[usize]) -> Result<usize, MultiArrayError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| shape_overflow(shape))
}

fn shape_overflow(shape: &[usize]) -> MultiArrayError {
    MultiArrayError::ShapeOverflow {
        shape: shape.to_vec(),
    }
}

/// Returns true if every supplied coordinate lies inside its axis and there
/// are no more coordinates than axes.
pub fn coords_in_range(coords: &[isize], shape: &[usize]) -> bool {
    if coords.len() > shape.len() {
        return false;
    }
    coords
        .iter()
        .zip(shape)
        .all(|(&c, &dim)| c >= 0 && (c as usize) < dim)
}

/// Computes the flat `[start, end)` range selected by a coordinate prefix.
///
/// An empty prefix selects the whole buffer (nothing, for a dimensionless
/// array). Otherwise the range starts at
/// `Σ coords[i] * strides[i]` and spans `strides[k - 1]` elements, where `k`
/// is the prefix length.
pub fn prefix_range(
    coords: &[isize],
    shape: &[usize],
    strides: &[usize],
) -> Result<(usize, usize), MultiArrayError> {
    if coords.len() > shape.len() {
        return Err(MultiArrayError::TooManyCoordinates {
            coords: coords.to_vec(),
            shape: shape.to_vec(),
        });
    }
    if !coords_in_range(coords, shape) {
        return Err(MultiArrayError::IndexOutOfBounds {
            coords: coords.to_vec(),
            shape: shape.to_vec(),
        });
    }
    match coords.len() {
        0 if shape.is_empty() => Ok((0, 0)),
        0 => Ok((0, numel(shape)?)),
        k => {
            let start: usize = coords
                .iter()
                .zip(strides)
                .map(|(&c, &stride)| c as usize * stride)
                .sum();
            Ok((start, start + strides[k - 1]))
        }
    }
}
