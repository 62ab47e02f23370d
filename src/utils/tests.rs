use crate::utils::{UtilsError, validate_range};

#[test]
fn test_validate_range_valid() {
    assert!(validate_range(0, 0).is_ok());
    assert!(validate_range(-8, 8).is_ok());
    assert!(validate_range(i32::MIN, i32::MAX).is_ok());
}

#[test]
fn test_validate_range_invalid() {
    assert_eq!(
        validate_range(1, 0),
        Err(UtilsError::InvalidRange { min: 1, max: 0 })
    );
    assert!(validate_range(i32::MAX, i32::MIN).is_err());
}
