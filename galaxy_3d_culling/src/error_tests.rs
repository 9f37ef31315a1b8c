//! Unit tests for error.rs

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_camera_properties_display() {
    let err = Error::InvalidCameraProperties("far_width must be positive".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid camera properties"));
    assert!(display.contains("far_width must be positive"));
}

#[test]
fn test_capacity_exceeded_display() {
    let err = Error::CapacityExceeded { capacity: 4096 };
    assert_eq!(
        format!("{}", err),
        "Capacity exceeded: buffer holds at most 4096 elements"
    );
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::CapacityExceeded { capacity: 2 };
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InvalidCameraProperties("x".to_string()));
    assert!(debug.contains("InvalidCameraProperties"));

    let debug = format!("{:?}", Error::CapacityExceeded { capacity: 8 });
    assert!(debug.contains("CapacityExceeded"));
    assert!(debug.contains("8"));
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::InvalidCameraProperties("aspect".to_string());
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::CapacityExceeded { capacity: 1 });
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::CapacityExceeded { capacity: 0 })
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert_eq!(outer(), Err(Error::CapacityExceeded { capacity: 0 }));
}
