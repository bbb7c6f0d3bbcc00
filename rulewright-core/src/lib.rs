//! # rulewright-core
//!
//! Foundation crate for Rulewright.
//! Errors, configuration, tracing setup, and shared constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::RulewrightConfig;
pub use errors::{ConfigError, RegistryError, RulewrightErrorCode};
