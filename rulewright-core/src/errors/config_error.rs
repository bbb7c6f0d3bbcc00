//! Configuration errors, tagged with the layer that produced them.

use std::fmt;

use super::error_code::{self, RulewrightErrorCode};

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayer {
    /// `~/.rulewright/config.toml`
    User,
    /// `rulewright.toml` in the project root.
    Project,
    /// A TOML string handed to `RulewrightConfig::from_toml`.
    Inline,
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Project => "project",
            Self::Inline => "inline",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {layer} config {path}: {source}")]
    Unreadable {
        layer: ConfigLayer,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {layer} config {path}: {message}")]
    ParseError {
        layer: ConfigLayer,
        path: String,
        message: String,
    },

    /// A resolved setting is out of range, e.g. a zero size limit or an
    /// empty custom pattern.
    #[error("Setting `{field}` rejected: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Environment override {var}={value:?} rejected: {message}")]
    InvalidEnvOverride {
        var: String,
        value: String,
        message: String,
    },

    #[error("Cannot serialize config: {0}")]
    Serialize(String),
}

impl RulewrightErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } => error_code::CONFIG_UNREADABLE,
            Self::ParseError { .. } | Self::Serialize(_) => error_code::CONFIG_ERROR,
            Self::ValidationFailed { .. } => error_code::CONFIG_INVALID,
            Self::InvalidEnvOverride { .. } => error_code::CONFIG_ENV_OVERRIDE,
        }
    }
}
