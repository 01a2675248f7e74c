//! # Config Crate
//!
//! Centralized configuration constants for the Ballerina fragment pipeline.
//! All magic values and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FUNCTION_NAME, MAX_FRAGMENT_DEPTH};
//!
//! // Placeholder identifier for nodes created without a function name
//! assert_eq!(DEFAULT_FUNCTION_NAME, "callFunction");
//!
//! // Parse trees nested deeper than this are rejected
//! assert!(MAX_FRAGMENT_DEPTH >= 16);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Editor Compatible**: Defaults match the composer's behavior
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
