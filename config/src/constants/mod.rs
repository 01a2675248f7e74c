//! Centralized configuration values shared across the Ballerina fragment
//! pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Placeholder identifier used for a function-invocation node whose name has
/// not been set yet, e.g. one freshly dropped onto the canvas.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FUNCTION_NAME;
/// assert_eq!(DEFAULT_FUNCTION_NAME, "callFunction");
/// ```
pub const DEFAULT_FUNCTION_NAME: &str = "callFunction";

/// Literal emitted by the fragment parser in `package_path` when the invoked
/// function lives in the current compilation unit.
///
/// # Examples
/// ```
/// use config::constants::CURRENT_PACKAGE_PATH;
/// assert_eq!(CURRENT_PACKAGE_PATH, ".");
/// ```
pub const CURRENT_PACKAGE_PATH: &str = ".";

/// Separator placed between flattened argument strings when a node's
/// argument text is derived from its children.
///
/// # Examples
/// ```
/// use config::constants::ARGS_TEXT_SEPARATOR;
/// assert_eq!(["a", "b"].join(ARGS_TEXT_SEPARATOR), "a, b");
/// ```
pub const ARGS_TEXT_SEPARATOR: &str = ", ";

/// Maximum nesting depth accepted when materializing a parse tree.
///
/// Parse trees nested deeper than this are rejected rather than risking
/// unbounded recursion on hostile input.
///
/// # Examples
/// ```
/// use config::constants::MAX_FRAGMENT_DEPTH;
/// assert!(MAX_FRAGMENT_DEPTH >= 16);
/// ```
pub const MAX_FRAGMENT_DEPTH: usize = 64;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Immutable snapshot of fragment-pipeline settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::SyncConfig;
/// let config = SyncConfig::default();
/// assert!(config.max_fragment_depth > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    /// Maximum parse-tree nesting depth accepted during materialization.
    pub max_fragment_depth: usize,
    /// Stack space reserved per recursion growth step.
    pub stack_size_bytes: usize,
}

impl SyncConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// depth limit and stack reservation.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SyncConfig;
    /// let cfg = SyncConfig::new(32, 1024 * 1024).expect("valid config");
    /// assert_eq!(cfg.max_fragment_depth, 32);
    /// ```
    pub fn new(max_fragment_depth: usize, stack_size_bytes: usize) -> Result<Self, ConfigError> {
        if max_fragment_depth == 0 {
            return Err(ConfigError::InvalidDepth(max_fragment_depth));
        }
        if stack_size_bytes < 1024 {
            return Err(ConfigError::InvalidStackSize(stack_size_bytes));
        }
        Ok(Self {
            max_fragment_depth,
            stack_size_bytes,
        })
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_fragment_depth: MAX_FRAGMENT_DEPTH,
            stack_size_bytes: STACKER_STACK_SIZE_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the depth limit is zero.
    InvalidDepth(usize),
    /// Raised when the stack reservation is too small to be useful.
    InvalidStackSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDepth(value) => {
                write!(f, "max_fragment_depth must be positive: {value}")
            }
            ConfigError::InvalidStackSize(value) => {
                write!(f, "stack_size_bytes must be >= 1024: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
