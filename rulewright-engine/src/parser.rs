//! Rule parser: natural-language statement in, rule record out.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use rulewright_core::config::ParserConfig;
use rulewright_core::errors::RegistryError;

use crate::builder::RuleBuilder;
use crate::conflicts::detect_conflicts;
use crate::matcher::{match_statement, CategoryMatch};
use crate::registry::PatternRegistry;
use crate::rule::Rule;
use crate::validation::{validate, ValidationReport};

/// Parses statements against an injected, immutable pattern registry.
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct RuleParser {
    registry: Arc<PatternRegistry>,
    builder: RuleBuilder,
}

impl RuleParser {
    /// Parser over the built-in registry.
    pub fn new() -> Self {
        Self::with_registry(PatternRegistry::builtin())
    }

    pub fn with_registry(registry: impl Into<Arc<PatternRegistry>>) -> Self {
        Self {
            registry: registry.into(),
            builder: RuleBuilder::new(),
        }
    }

    /// Parser over the built-in registry extended with configured patterns.
    pub fn from_config(config: &ParserConfig) -> Result<Self, RegistryError> {
        if config.custom_patterns.is_empty() {
            return Ok(Self::new());
        }
        Ok(Self::with_registry(PatternRegistry::from_config(config)?))
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Classify without building a rule.
    pub fn classify(&self, statement: &str) -> Option<CategoryMatch> {
        match_statement(&self.registry, statement)
    }

    /// Parse a statement into a pending rule, or `None` if no category fits.
    pub fn parse(&self, statement: &str) -> Option<Rule> {
        self.parse_at(statement, Utc::now())
    }

    /// `parse` with an explicit creation time.
    pub fn parse_at(&self, statement: &str, now: DateTime<Utc>) -> Option<Rule> {
        let m = self.classify(statement)?;
        Some(self.builder.build_at(&m.statement, m.parameters, now))
    }

    pub fn validate(&self, rule: &Rule, existing: &[Rule]) -> ValidationReport {
        validate(rule, existing)
    }

    pub fn detect_conflicts(&self, rule: &Rule, existing: &[Rule]) -> Vec<String> {
        detect_conflicts(rule, existing)
    }
}

impl Default for RuleParser {
    fn default() -> Self {
        Self::new()
    }
}
