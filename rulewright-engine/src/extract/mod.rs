//! Parameter extractors: one per category.
//!
//! Each extractor receives the capture groups of the successful match
//! (`None` for a group that did not participate) and returns the typed
//! parameters, or `None` when nothing usable was found.

mod digits;
mod file_limits;
mod notification;
mod roles;
mod workflow;

pub use file_limits::extract_file_limit_params;
pub use notification::extract_notification_params;
pub use roles::extract_role_params;
pub use workflow::extract_workflow_params;

use crate::rule::{RuleCategory, RuleParameters};
use digits::digit_value;

/// Dispatch to the extractor statically bound to `category`.
pub fn extract(category: RuleCategory, groups: &[Option<&str>]) -> Option<RuleParameters> {
    let params = match category {
        RuleCategory::FileLimits => extract_file_limit_params(groups).map(RuleParameters::FileLimits),
        RuleCategory::WorkflowRequirements => Some(RuleParameters::WorkflowRequirements(
            extract_workflow_params(groups),
        )),
        RuleCategory::NotificationPreferences => {
            extract_notification_params(groups).map(RuleParameters::NotificationPreferences)
        }
        RuleCategory::CollaborationRoles => {
            extract_role_params(groups).map(RuleParameters::CollaborationRoles)
        }
    };
    params.filter(|p| !p.is_empty())
}

/// A group made only of decimal digits (any script), parsed. Overflow
/// counts as not numeric.
pub(crate) fn parse_numeric(group: &str) -> Option<u64> {
    if group.is_empty() {
        return None;
    }
    group.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(u64::from(digit_value(c)?))
    })
}

pub(crate) fn is_numeric(group: &str) -> bool {
    !group.is_empty() && group.chars().all(|c| digit_value(c).is_some())
}
