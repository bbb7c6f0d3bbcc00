//! Review collaborators: a source-smell gatekeeper and the rolling context
//! buffer it feeds. Both are opaque to rule parsing.

pub mod context;
pub mod gatekeeper;

pub use context::{ContextBuffer, ParsedFeedback};
pub use gatekeeper::{Gatekeeper, ReviewAction, ReviewIssue, ReviewVerdict};

/// Reviews source text and returns a verdict.
pub trait CodeReviewer {
    fn review(&mut self, source: &str, filename: &str, prior_feedback: &str) -> ReviewVerdict;
}

/// Accepts new text plus prior feedback and returns the updated context.
/// Retention policy is the implementor's business.
pub trait ContextSink {
    fn update(&mut self, new_text: &str, prior_feedback: &str) -> String;
}
