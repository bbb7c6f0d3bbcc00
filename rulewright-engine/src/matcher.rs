//! Category matcher: first category/pattern whose extractor succeeds wins.

use crate::extract::extract;
use crate::registry::PatternRegistry;
use crate::rule::{RuleCategory, RuleParameters};

/// A successful classification of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: RuleCategory,
    pub parameters: RuleParameters,
    /// The trimmed statement.
    pub statement: String,
    /// Index of the winning pattern within its category.
    pub pattern_index: usize,
}

/// Classify `statement` against `registry`.
///
/// Categories are tried in registry order and patterns in declaration
/// order. A pattern that matches but whose extractor yields nothing does
/// not stop the search. `None` means the statement has no recognized
/// policy shape.
pub fn match_statement(registry: &PatternRegistry, statement: &str) -> Option<CategoryMatch> {
    let statement = statement.trim();

    for entry in registry.entries() {
        for (pattern_index, pattern) in entry.patterns.iter().enumerate() {
            let Some(caps) = pattern.captures(statement) else {
                continue;
            };
            let groups: Vec<Option<&str>> =
                caps.iter().skip(1).map(|g| g.map(|m| m.as_str())).collect();

            match extract(entry.category, &groups) {
                Some(parameters) => {
                    tracing::debug!(
                        category = %entry.category,
                        pattern_index,
                        "statement classified"
                    );
                    return Some(CategoryMatch {
                        category: entry.category,
                        parameters,
                        statement: statement.to_string(),
                        pattern_index,
                    });
                }
                None => {
                    tracing::trace!(
                        category = %entry.category,
                        pattern_index,
                        "pattern matched but extracted no parameters"
                    );
                }
            }
        }
    }

    tracing::debug!(statement, "no rule category matched");
    None
}
