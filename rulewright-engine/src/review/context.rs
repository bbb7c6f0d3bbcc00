//! Rolling context buffer with tail truncation.

use serde::Deserialize;

use rulewright_core::config::ContextConfig;

use super::{ContextSink, ReviewAction};

/// Appends diff/feedback pairs to a summary capped at `max_chars`
/// characters, keeping the most recent text.
#[derive(Debug, Clone)]
pub struct ContextBuffer {
    summary: String,
    diff_tail_chars: usize,
    max_chars: usize,
}

/// Feedback recovered from a reviewer's raw output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsedFeedback {
    #[serde(default)]
    pub action: ReviewAction,
    #[serde(default)]
    pub issues: Vec<String>,
}

impl ContextBuffer {
    pub fn new() -> Self {
        Self::from_config(&ContextConfig::default())
    }

    pub fn from_config(config: &ContextConfig) -> Self {
        Self {
            summary: config.effective_header().to_string(),
            diff_tail_chars: config.effective_diff_tail_chars(),
            max_chars: config.effective_max_chars(),
        }
    }

    /// The current summary.
    pub fn context(&self) -> &str {
        &self.summary
    }

    /// Extract the JSON object embedded in `raw`. Anything unparseable
    /// becomes a `revise` verdict carrying the raw text as its only issue.
    pub fn parse_feedback(raw: &str) -> ParsedFeedback {
        let fallback = || ParsedFeedback {
            action: ReviewAction::Revise,
            issues: vec![raw.to_string()],
        };
        let Some(start) = raw.find('{') else {
            return fallback();
        };
        let end = raw.rfind('}').map(|i| i + 1).unwrap_or(0);
        if end <= start {
            return fallback();
        }
        serde_json::from_str(&raw[start..end]).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "feedback is not valid JSON");
            fallback()
        })
    }
}

impl Default for ContextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextSink for ContextBuffer {
    fn update(&mut self, new_text: &str, prior_feedback: &str) -> String {
        self.summary.push_str("\n---\n");
        self.summary.push_str("Diff: ");
        self.summary.push_str(tail_chars(new_text, self.diff_tail_chars));
        self.summary.push_str("\nFeedback: ");
        self.summary.push_str(prior_feedback.trim());
        self.summary.push('\n');

        let kept = tail_chars(&self.summary, self.max_chars);
        if kept.len() != self.summary.len() {
            self.summary = kept.to_string();
        }
        self.summary.clone()
    }
}

/// The last `n` characters of `s`.
fn tail_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let start = s
        .char_indices()
        .nth(count - n)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_chars_respects_char_boundaries() {
        assert_eq!(tail_chars("héllo", 4), "éllo");
        assert_eq!(tail_chars("abc", 10), "abc");
        assert_eq!(tail_chars("abc", 0), "");
    }
}
