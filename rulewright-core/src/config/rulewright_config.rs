//! Top-level Rulewright configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ContextConfig, ParserConfig, ReviewConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::{ConfigError, ConfigLayer};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RULEWRIGHT_*`)
/// 2. Project config (`rulewright.toml` in project root)
/// 3. User config (`~/.rulewright/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulewrightConfig {
    pub parser: ParserConfig,
    pub review: ReviewConfig,
    pub context: ContextConfig,
}

impl RulewrightConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path, ConfigLayer::User) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "skipping unreadable user config");
                    }
                }
            }
        }

        // Layer 2: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path, ConfigLayer::Project)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config)?;

        Self::validate(&config)?;

        ::tracing::debug!(
            custom_patterns = config.parser.custom_patterns.len(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (no layering).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            layer: ConfigLayer::Inline,
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RulewrightConfig) -> Result<(), ConfigError> {
        if config.review.max_source_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "review.max_source_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.context.max_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "context.max_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (i, def) in config.parser.custom_patterns.iter().enumerate() {
            if def.pattern.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("parser.custom_patterns[{i}].pattern"),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.rulewright/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".rulewright").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(
        config: &mut RulewrightConfig,
        path: &Path,
        layer: ConfigLayer,
    ) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            layer,
            path: path.display().to_string(),
            source,
        })?;

        let file_config: RulewrightConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                layer,
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut RulewrightConfig, other: &RulewrightConfig) {
        // Parser
        if !other.parser.custom_patterns.is_empty() {
            base.parser.custom_patterns = other.parser.custom_patterns.clone();
        }

        // Review
        if other.review.max_source_chars.is_some() {
            base.review.max_source_chars = other.review.max_source_chars;
        }

        // Context
        if other.context.diff_tail_chars.is_some() {
            base.context.diff_tail_chars = other.context.diff_tail_chars;
        }
        if other.context.max_chars.is_some() {
            base.context.max_chars = other.context.max_chars;
        }
        if other.context.header.is_some() {
            base.context.header = other.context.header.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RULEWRIGHT_REVIEW_MAX_SOURCE_CHARS`, `RULEWRIGHT_CONTEXT_MAX_CHARS`, etc.
    fn apply_env_overrides(config: &mut RulewrightConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_usize("RULEWRIGHT_REVIEW_MAX_SOURCE_CHARS")? {
            config.review.max_source_chars = Some(v);
        }
        if let Some(v) = env_usize("RULEWRIGHT_CONTEXT_DIFF_TAIL_CHARS")? {
            config.context.diff_tail_chars = Some(v);
        }
        if let Some(v) = env_usize("RULEWRIGHT_CONTEXT_MAX_CHARS")? {
            config.context.max_chars = Some(v);
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

fn env_usize(key: &str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvOverride {
                var: key.to_string(),
                value: val.clone(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
