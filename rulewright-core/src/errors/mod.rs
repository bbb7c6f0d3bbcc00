//! Error handling for Rulewright.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Parsing, validation and conflict detection never fail; errors only
//! surface while loading configuration or compiling custom patterns.

pub mod config_error;
pub mod error_code;
pub mod registry_error;

pub use config_error::{ConfigError, ConfigLayer};
pub use error_code::RulewrightErrorCode;
pub use registry_error::RegistryError;
