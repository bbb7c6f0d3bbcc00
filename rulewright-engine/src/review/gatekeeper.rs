//! Lightweight code-review gatekeeper: flags superficial smells and
//! approves or asks for a revision.

use serde::{Deserialize, Serialize};

use rulewright_core::config::RulewrightConfig;
use rulewright_core::constants::DEFAULT_MAX_SOURCE_CHARS;

use super::{CodeReviewer, ContextBuffer, ContextSink};

/// Verdict action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    #[default]
    Revise,
}

/// Smells the gatekeeper looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewIssue {
    FileTooLarge,
    GlobalState,
    DebugLeftIn,
}

impl ReviewIssue {
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::FileTooLarge => "Split into multiple smaller modules",
            Self::GlobalState => "Use dependency injection or config instead",
            Self::DebugLeftIn => "Remove console.log statements",
        }
    }
}

/// Result of a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewVerdict {
    pub action: ReviewAction,
    pub issues: Vec<ReviewIssue>,
    pub suggestions: Vec<String>,
    /// Context summary after this review was recorded.
    pub context_update: String,
}

impl ReviewVerdict {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Gatekeeper feeding every reviewed source into a context sink.
#[derive(Debug, Clone)]
pub struct Gatekeeper<S: ContextSink = ContextBuffer> {
    sink: S,
    max_source_chars: usize,
}

impl Gatekeeper<ContextBuffer> {
    pub fn new() -> Self {
        Self::with_sink(ContextBuffer::new(), DEFAULT_MAX_SOURCE_CHARS)
    }

    pub fn from_config(config: &RulewrightConfig) -> Self {
        Self::with_sink(
            ContextBuffer::from_config(&config.context),
            config.review.effective_max_source_chars(),
        )
    }

    pub fn context(&self) -> &str {
        self.sink.context()
    }
}

impl Default for Gatekeeper<ContextBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ContextSink> Gatekeeper<S> {
    pub fn with_sink(sink: S, max_source_chars: usize) -> Self {
        Self {
            sink,
            max_source_chars,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn smells(&self, source: &str, filename: &str) -> Vec<ReviewIssue> {
        let mut issues = Vec::new();
        if source.chars().count() > self.max_source_chars {
            issues.push(ReviewIssue::FileTooLarge);
        }
        if source.to_lowercase().contains("global ") || source.contains("window.") {
            issues.push(ReviewIssue::GlobalState);
        }
        if source.contains("console.log") && !filename.contains("debug") {
            issues.push(ReviewIssue::DebugLeftIn);
        }
        issues
    }
}

impl<S: ContextSink> CodeReviewer for Gatekeeper<S> {
    fn review(&mut self, source: &str, filename: &str, prior_feedback: &str) -> ReviewVerdict {
        let issues = self.smells(source, filename);
        let action = if issues.is_empty() {
            ReviewAction::Approve
        } else {
            ReviewAction::Revise
        };
        tracing::debug!(filename, ?action, issues = issues.len(), "source reviewed");

        ReviewVerdict {
            action,
            suggestions: issues.iter().map(|i| i.suggestion().to_string()).collect(),
            issues,
            context_update: self.sink.update(source, prior_feedback),
        }
    }
}
