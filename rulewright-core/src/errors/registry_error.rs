//! Pattern registry errors.

use super::error_code::{self, RulewrightErrorCode};

/// Errors that can occur while building a pattern registry from custom
/// pattern definitions.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown rule category '{category}' for pattern `{pattern}`")]
    UnknownCategory { category: String, pattern: String },

    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Pattern file parse error: {0}")]
    ParseError(String),
}

impl RulewrightErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory { .. } => error_code::UNKNOWN_CATEGORY,
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            Self::ParseError(_) => error_code::REGISTRY_ERROR,
        }
    }
}
