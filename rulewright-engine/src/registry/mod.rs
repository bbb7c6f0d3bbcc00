//! Pattern registry: ordered category → recognition patterns table.
//!
//! Built once, immutable afterwards. The built-in table is compiled lazily
//! and shared; custom patterns from config or a TOML pattern file produce a
//! new registry with the extra patterns appended to their category.

mod builtin;

use std::sync::{Arc, LazyLock};

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use rulewright_core::config::{ParserConfig, PatternDef};
use rulewright_core::errors::RegistryError;

use crate::rule::RuleCategory;
use builtin::BUILTIN_PATTERNS;

static BUILTIN: LazyLock<Arc<PatternRegistry>> = LazyLock::new(|| {
    let registry = PatternRegistry::compile_builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in patterns failed to compile");
        PatternRegistry { entries: Vec::new() }
    });
    Arc::new(registry)
});

/// Patterns recognized for one category, in declaration order.
#[derive(Debug, Clone)]
pub struct CategoryPatterns {
    pub category: RuleCategory,
    pub patterns: Vec<Regex>,
}

/// The ordered registry consulted by the matcher.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<CategoryPatterns>,
}

/// A TOML pattern file: a list of `[[patterns]]` tables.
#[derive(Debug, Deserialize)]
struct PatternFile {
    #[serde(default)]
    patterns: Vec<PatternDef>,
}

impl PatternRegistry {
    /// The shared built-in registry.
    pub fn builtin() -> Arc<PatternRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Built-in patterns plus `defs`, each appended after the patterns of
    /// its category. Disabled definitions are skipped.
    pub fn with_custom(defs: &[PatternDef]) -> Result<Self, RegistryError> {
        let mut registry = (*Self::builtin()).clone();
        let mut added = 0usize;
        for def in defs.iter().filter(|d| d.is_enabled()) {
            let category = RuleCategory::parse_str(&def.category).ok_or_else(|| {
                RegistryError::UnknownCategory {
                    category: def.category.clone(),
                    pattern: def.pattern.clone(),
                }
            })?;
            let regex = compile(&def.pattern)?;
            registry.push(category, regex);
            added += 1;
        }
        tracing::info!(
            custom_patterns = added,
            total_patterns = registry.pattern_count(),
            "pattern registry built"
        );
        Ok(registry)
    }

    /// Registry from the `[parser]` section of the configuration.
    pub fn from_config(config: &ParserConfig) -> Result<Self, RegistryError> {
        Self::with_custom(&config.custom_patterns)
    }

    /// Registry from a TOML pattern file body:
    ///
    /// ```toml
    /// [[patterns]]
    /// category = "file_limits"
    /// pattern = 'cap\s+(.*?)\s+files?\s+at\s+(\d+)'
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self, RegistryError> {
        let file: PatternFile =
            toml::from_str(toml_str).map_err(|e| RegistryError::ParseError(e.to_string()))?;
        Self::with_custom(&file.patterns)
    }

    /// Entries in matching order.
    pub fn entries(&self) -> &[CategoryPatterns] {
        &self.entries
    }

    /// Patterns registered for `category`.
    pub fn patterns_for(&self, category: RuleCategory) -> &[Regex] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.patterns.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of patterns across all categories.
    pub fn pattern_count(&self) -> usize {
        self.entries.iter().map(|e| e.patterns.len()).sum()
    }

    fn compile_builtin() -> Result<Self, RegistryError> {
        let mut entries = Vec::with_capacity(BUILTIN_PATTERNS.len());
        for (category, sources) in BUILTIN_PATTERNS {
            let patterns = sources
                .iter()
                .map(|src| compile(src))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push(CategoryPatterns {
                category: *category,
                patterns,
            });
        }
        Ok(Self { entries })
    }

    fn push(&mut self, category: RuleCategory, regex: Regex) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.patterns.push(regex),
            None => self.entries.push(CategoryPatterns {
                category,
                patterns: vec![regex],
            }),
        }
    }
}

/// Compile a recognition pattern: case-insensitive, unanchored.
fn compile(source: &str) -> Result<Regex, RegistryError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| RegistryError::InvalidPattern {
            pattern: source.to_string(),
            message: e.to_string(),
        })
}
