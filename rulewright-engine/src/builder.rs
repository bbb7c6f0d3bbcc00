//! Rule builder: stamps identity and timestamps onto extracted parameters.

use chrono::{DateTime, SubsecRound, Utc};

use rulewright_core::constants::{DEFAULT_CREATED_BY, RULE_ID_PREFIX};

use crate::rule::{Priority, Rule, RuleParameters, RuleStatus};

/// Assembles rule records. Stateless apart from the clock read in `build`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBuilder;

impl RuleBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a rule stamped with the current time.
    pub fn build(&self, description: &str, parameters: RuleParameters) -> Rule {
        self.build_at(description, parameters, Utc::now())
    }

    /// Build a rule stamped with `now`, truncated to whole seconds. The
    /// category is the one the parameter variant belongs to.
    ///
    /// Rules built within the same second share an identifier.
    pub fn build_at(&self, description: &str, parameters: RuleParameters, now: DateTime<Utc>) -> Rule {
        let now = now.trunc_subsecs(0);
        Rule {
            rule_id: Self::rule_id_for(now),
            category: Some(parameters.category()),
            description: description.trim().to_string(),
            created_date: now,
            created_by: DEFAULT_CREATED_BY.to_string(),
            status: RuleStatus::Pending,
            parameters: Some(parameters),
            conflicts: Vec::new(),
            priority: Priority::Medium,
        }
    }

    /// `UR-<YYYYmmddHHMMSS>` for the given instant.
    pub fn rule_id_for(now: DateTime<Utc>) -> String {
        format!("{RULE_ID_PREFIX}-{}", now.format("%Y%m%d%H%M%S"))
    }
}
