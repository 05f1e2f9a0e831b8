#[cfg(test)]
// Tests for assign / try_assign / From.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_assign_widening_conversion() -> Result<(), MultiArrayError> {
    let src = MultiArray::from_vec(vec![0.1f32, -2.5, 3.25, 1e-3, 7.0, 8.5], &[3, 2])?;
    let mut dst: MultiArray<f64> = MultiArray::with_shape(&[9, 9, 9])?;
    dst.assign(&src);

    assert_eq!(dst.shape(), src.shape());
    assert_eq!(dst.strides(), &[2, 1]);
    for (converted, original) in dst.iter().zip(src.iter()) {
        assert_relative_eq!(*converted, <f64 as From<f32>>::from(*original));
    }
    assert_relative_eq!(*dst.get(&[0, 0])?, 0.1, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_assign_same_type_equals_source() -> Result<(), MultiArrayError> {
    let src = MultiArray::from_vec((0..12).collect::<Vec<i32>>(), &[2, 2, 3])?;
    let mut dst: MultiArray<i32> = MultiArray::new();
    dst.assign(&src);
    assert_eq!(dst, src);
    Ok(())
}

#[test]
fn test_assign_from_dimensionless() {
    let src: MultiArray<u8> = MultiArray::new();
    let mut dst = MultiArray::filled(&[2, 2], 1u32).unwrap();
    dst.assign(&src);
    assert_eq!(dst.num_dims(), 0);
    assert!(dst.is_empty());
}

#[test]
fn test_from_reference_conversion() -> Result<(), MultiArrayError> {
    let src = MultiArray::from_vec(vec![1u16, 2, 3], &[3])?;
    let dst: MultiArray<u64> = MultiArray::from(&src);
    assert_eq!(dst.data(), &[1, 2, 3]);
    let via_into: MultiArray<i32> = (&src).into();
    assert_eq!(via_into.shape(), &[3]);
    Ok(())
}

#[test]
fn test_try_assign_narrowing() -> Result<(), MultiArrayError> {
    let src = MultiArray::from_vec(vec![1.9f64, -2.5, 300.0, 0.0], &[2, 2])?;
    let mut dst: MultiArray<i32> = MultiArray::new();
    dst.try_assign(&src)?;
    assert_eq!(dst.shape(), &[2, 2]);
    assert_eq!(dst.data(), &[1, -2, 300, 0]);
    Ok(())
}

#[test]
fn test_try_assign_from_dimensionless() -> Result<(), MultiArrayError> {
    let src: MultiArray<f64> = MultiArray::new();
    let mut dst = MultiArray::filled(&[3, 2], 5i16)?;
    dst.try_assign(&src)?;
    assert_eq!(dst.num_dims(), 0);
    assert!(dst.is_empty());
    assert!(dst.strides().is_empty());
    assert_eq!(dst, MultiArray::new());
    Ok(())
}

#[test]
fn test_try_assign_reports_first_unrepresentable_element() -> Result<(), MultiArrayError> {
    let src = MultiArray::from_vec(vec![10i32, 255, 256, -1], &[4])?;
    let mut dst = MultiArray::filled(&[1], 42u8)?;
    let err = dst.try_assign(&src).unwrap_err();
    assert_eq!(err, MultiArrayError::ConversionFailed { index: 2 });
    // Unchanged on failure.
    assert_eq!(dst.shape(), &[1]);
    assert_eq!(dst.data(), &[42]);
    Ok(())
}

#[test]
fn test_try_assign_nan_to_integer_fails() -> Result<(), MultiArrayError> {
    let src = MultiArray::from_vec(vec![f32::NAN], &[1])?;
    let mut dst: MultiArray<i64> = MultiArray::new();
    assert!(matches!(
        dst.try_assign(&src),
        Err(MultiArrayError::ConversionFailed { index: 0 })
    ));
    Ok(())
}
