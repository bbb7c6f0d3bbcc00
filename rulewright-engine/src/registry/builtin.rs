//! Built-in recognition patterns, in matching order.

use crate::rule::RuleCategory;

/// Category → patterns. Category order and pattern order are both part of
/// the matching contract: the first pattern whose extractor succeeds wins.
pub(crate) const BUILTIN_PATTERNS: &[(RuleCategory, &[&str])] = &[
    (
        RuleCategory::FileLimits,
        &[
            r"(.*?)\s+files?\s+should be limited to\s+(\d+)\s+lines",
            r"maximum\s+(\d+)\s+lines?\s+for\s+(.*?)\s+files?",
            r"file size limit\s+of\s+(\d+)\s+lines?\s+for\s+(.*?)",
            r"limit\s+(.*?)\s+files?\s+to\s+(\d+)\s+lines?",
        ],
    ),
    (
        RuleCategory::WorkflowRequirements,
        &[
            r"requires?\s+(.*?)\s+before\s+(.*?)$",
            r"must\s+(.*?)\s+before\s+(.*?)$",
            r"always\s+(.*?)$",
            r"(.*?)\s+required\s+for\s+(.*?)$",
        ],
    ),
    (
        RuleCategory::NotificationPreferences,
        &[
            r"updates?\s+every\s+(\d+)\s+(minutes?|hours?|seconds?)",
            r"notify\s+when\s+(.*?)$",
            r"progress reports?\s+(.*?)$",
        ],
    ),
    (
        RuleCategory::CollaborationRoles,
        &[r"(TCC|OCC)\s+should\s+(.*?)$", r"framework should\s+(.*?)$"],
    ),
];
