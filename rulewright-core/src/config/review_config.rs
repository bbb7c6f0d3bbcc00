//! Code-review gatekeeper configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_SOURCE_CHARS;

/// Configuration for the review gatekeeper.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewConfig {
    /// Source size in characters above which a file is flagged. Default: 5000.
    pub max_source_chars: Option<usize>,
}

impl ReviewConfig {
    /// Returns the effective source size limit, defaulting to 5000.
    pub fn effective_max_source_chars(&self) -> usize {
        self.max_source_chars.unwrap_or(DEFAULT_MAX_SOURCE_CHARS)
    }
}
