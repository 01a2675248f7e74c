//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane.
///
/// # Examples
/// ```
/// use config::constants::SyncConfig;
/// let cfg = SyncConfig::default();
/// assert!(cfg.max_fragment_depth > 0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = SyncConfig::default();
    assert!(cfg.max_fragment_depth > 0);
    assert!(cfg.stack_size_bytes >= 1024);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::SyncConfig;
/// assert!(SyncConfig::new(0, 1024 * 1024).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        SyncConfig::new(0, 1024 * 1024).unwrap_err(),
        ConfigError::InvalidDepth(0)
    );
    assert_eq!(
        SyncConfig::new(32, 16).unwrap_err(),
        ConfigError::InvalidStackSize(16)
    );
}

#[test]
fn placeholder_name_is_nonempty() {
    assert!(!DEFAULT_FUNCTION_NAME.is_empty());
}

#[test]
fn current_package_sentinel_is_single_dot() {
    assert_eq!(CURRENT_PACKAGE_PATH, ".");
    assert_ne!(CURRENT_PACKAGE_PATH, "");
}
