//! Conflict detection between a candidate rule and an existing corpus.
//!
//! Only file limit rules are compared. Two file limit rules overlap when they
//! name the same file type or when either leaves the type unspecified, since
//! an unspecified type covers every file.

use crate::rule::Rule;

/// Identifiers of existing rules that conflict with `rule`, in corpus order.
pub fn detect_conflicts(rule: &Rule, existing: &[Rule]) -> Vec<String> {
    if !rule.is_file_limit() {
        return Vec::new();
    }
    let candidate_type = rule.file_type();

    let conflicts: Vec<String> = existing
        .iter()
        .filter(|other| other.is_file_limit())
        .filter(|other| {
            let other_type = other.file_type();
            candidate_type == other_type || candidate_type.is_none() || other_type.is_none()
        })
        .map(|other| other.rule_id.clone())
        .collect();

    if !conflicts.is_empty() {
        tracing::debug!(
            rule_id = %rule.rule_id,
            conflicts = conflicts.len(),
            "file limit rule overlaps existing rules"
        );
    }
    conflicts
}
