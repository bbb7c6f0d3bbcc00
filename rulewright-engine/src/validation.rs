//! Rule validation: structural completeness plus conflict detection.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::conflicts::detect_conflicts;
use crate::rule::Rule;

/// Fields every rule record must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    RuleId,
    Category,
    Description,
    Parameters,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        Self::RuleId,
        Self::Category,
        Self::Description,
        Self::Parameters,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RuleId => "rule_id",
            Self::Category => "category",
            Self::Description => "description",
            Self::Parameters => "parameters",
        }
    }

    fn is_missing(&self, rule: &Rule) -> bool {
        match self {
            Self::RuleId => rule.rule_id.trim().is_empty(),
            Self::Category => rule.category.is_none(),
            Self::Description => rule.description.trim().is_empty(),
            // An empty mapping still counts as present.
            Self::Parameters => rule.parameters.is_none(),
        }
    }
}

/// A single reason a rule failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingField(RequiredField),
    Conflict { rule_id: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field: {}", field.as_str()),
            Self::Conflict { rule_id } => write!(f, "Conflict with rule {rule_id}"),
        }
    }
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Outcome of `validate`. Advisory data, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Issues rendered as human-readable strings.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Check `rule` for missing fields and, when `existing` is non-empty, for
/// conflicts with it. `rule.conflicts` is left untouched.
pub fn validate(rule: &Rule, existing: &[Rule]) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = RequiredField::ALL
        .into_iter()
        .filter(|field| field.is_missing(rule))
        .map(ValidationIssue::MissingField)
        .collect();

    if !existing.is_empty() {
        issues.extend(
            detect_conflicts(rule, existing)
                .into_iter()
                .map(|rule_id| ValidationIssue::Conflict { rule_id }),
        );
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
    }
}
