//! RulewrightErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so callers embedding the engine can
/// branch on a stable code instead of the display text.
pub trait RulewrightErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_UNREADABLE: &str = "CONFIG_UNREADABLE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const CONFIG_ENV_OVERRIDE: &str = "CONFIG_ENV_OVERRIDE";
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
