//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.max_subdivision_depth >= 1);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 8).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 8).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 0).unwrap_err(),
        ConfigError::InvalidSubdivisionDepth(0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, MAX_SUBDIVISION_DEPTH + 1).unwrap_err(),
        ConfigError::InvalidSubdivisionDepth(MAX_SUBDIVISION_DEPTH + 1)
    );
}

#[test]
fn nan_tolerance_is_rejected() {
    assert!(GlobalConfig::new(f64::NAN, 4).is_err());
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidSubdivisionDepth(99);
    assert!(err.to_string().contains("max_subdivision_depth"));
}
