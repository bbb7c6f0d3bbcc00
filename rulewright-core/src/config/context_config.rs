//! Rolling context buffer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONTEXT_HEADER, DEFAULT_CONTEXT_MAX_CHARS, DEFAULT_DIFF_TAIL_CHARS};

/// Configuration for the rolling context buffer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContextConfig {
    /// Trailing diff characters kept per update. Default: 1800.
    pub diff_tail_chars: Option<usize>,
    /// Maximum summary size in characters. Default: 4000.
    pub max_chars: Option<usize>,
    /// Initial summary content.
    pub header: Option<String>,
}

impl ContextConfig {
    /// Returns the effective diff tail length, defaulting to 1800.
    pub fn effective_diff_tail_chars(&self) -> usize {
        self.diff_tail_chars.unwrap_or(DEFAULT_DIFF_TAIL_CHARS)
    }

    /// Returns the effective summary cap, defaulting to 4000.
    pub fn effective_max_chars(&self) -> usize {
        self.max_chars.unwrap_or(DEFAULT_CONTEXT_MAX_CHARS)
    }

    /// Returns the effective header.
    pub fn effective_header(&self) -> &str {
        self.header.as_deref().unwrap_or(DEFAULT_CONTEXT_HEADER)
    }
}
