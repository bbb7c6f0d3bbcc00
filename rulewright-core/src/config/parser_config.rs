//! Rule parser configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the rule parser.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParserConfig {
    /// Extra recognition patterns, appended after the built-in patterns of
    /// their category.
    pub custom_patterns: Vec<PatternDef>,
}

/// A user-supplied recognition pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Category name, e.g. `file_limits`.
    pub category: String,
    /// Regular expression; matched case-insensitively, unanchored.
    pub pattern: String,
    /// Disabled definitions are skipped. Default: enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl PatternDef {
    pub fn new(category: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            pattern: pattern.into(),
            enabled: None,
        }
    }

    /// Returns whether this definition should be compiled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}
