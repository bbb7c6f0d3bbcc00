//! Core types for rule records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rulewright_core::constants::DEFAULT_CREATED_BY;

/// The closed set of recognized statement categories.
///
/// Declaration order is the matching order of the built-in registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    FileLimits,
    WorkflowRequirements,
    NotificationPreferences,
    CollaborationRoles,
}

impl RuleCategory {
    /// All categories, in registry order.
    pub const ALL: [RuleCategory; 4] = [
        Self::FileLimits,
        Self::WorkflowRequirements,
        Self::NotificationPreferences,
        Self::CollaborationRoles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileLimits => "file_limits",
            Self::WorkflowRequirements => "workflow_requirements",
            Self::NotificationPreferences => "notification_preferences",
            Self::CollaborationRoles => "collaboration_roles",
        }
    }

    /// Parse a category from its snake_case name.
    pub fn parse_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status. The engine only ever creates `Pending` rules;
/// transitions belong to whoever stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Rule priority. Every built rule gets `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Canonical file type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Py,
    Js,
    Ts,
    Sh,
    Md,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Py => "py",
            Self::Js => "js",
            Self::Ts => "ts",
            Self::Sh => "sh",
            Self::Md => "md",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a `file_limits` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLimitParams {
    pub line_limit: u64,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
}

/// Parameters of a `workflow_requirements` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowParams {
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<String>,
}

/// Parameters of a `notification_preferences` rule.
///
/// Either the frequency pair or `conditions` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_seconds: Option<u64>,
    /// Human-readable `"<n> <unit>"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

/// Parameters of a `collaboration_roles` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleParams {
    pub role: String,
    pub responsibility: String,
}

/// Category-specific parameters. Serialized as a flat mapping; the variant
/// is recovered from the key set on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleParameters {
    FileLimits(FileLimitParams),
    CollaborationRoles(RoleParams),
    WorkflowRequirements(WorkflowParams),
    NotificationPreferences(NotificationParams),
}

impl RuleParameters {
    /// The category this parameter shape belongs to.
    pub fn category(&self) -> RuleCategory {
        match self {
            Self::FileLimits(_) => RuleCategory::FileLimits,
            Self::WorkflowRequirements(_) => RuleCategory::WorkflowRequirements,
            Self::NotificationPreferences(_) => RuleCategory::NotificationPreferences,
            Self::CollaborationRoles(_) => RuleCategory::CollaborationRoles,
        }
    }

    /// True when the mapping would serialize with no keys.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::NotificationPreferences(p) => {
                p.frequency_seconds.is_none() && p.frequency.is_none() && p.conditions.is_none()
            }
            _ => false,
        }
    }
}

/// A structured rule built from a natural-language statement.
///
/// Field order is the serialized key order. `rule_id`, `category`,
/// `description` and `parameters` tolerate absence on deserialization so
/// incomplete stored records can still be validated. `created_date` is
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub rule_id: String,
    #[serde(default)]
    pub category: Option<RuleCategory>,
    #[serde(default)]
    pub description: String,
    #[serde(with = "created_date_format")]
    pub created_date: DateTime<Utc>,
    #[serde(default = "default_created_by")]
    pub created_by: String,
    #[serde(default)]
    pub status: RuleStatus,
    #[serde(default)]
    pub parameters: Option<RuleParameters>,
    #[serde(default)]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl Rule {
    /// The `file_type` of a file limit rule; `None` when unspecified or when
    /// the rule carries no file limit parameters.
    pub fn file_type(&self) -> Option<FileType> {
        match &self.parameters {
            Some(RuleParameters::FileLimits(p)) => p.file_type,
            _ => None,
        }
    }

    pub fn is_file_limit(&self) -> bool {
        self.category == Some(RuleCategory::FileLimits)
    }

    /// Serialize to pretty JSON with stable key order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn default_created_by() -> String {
    DEFAULT_CREATED_BY.to_string()
}

/// `created_date` is stored as `%Y-%m-%dT%H:%M:%SZ`.
pub(crate) mod created_date_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
