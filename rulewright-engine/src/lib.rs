//! # rulewright-engine
//!
//! Turns natural-language policy statements into structured rule records
//! and detects conflicts between them.
//!
//! Pipeline: statement → [`matcher`] (consults the [`registry`]) →
//! [`extract`] (consults [`aliases`] for file types) → [`builder`] → [`Rule`].
//! Separately: rule + existing rules → [`validation`] → [`conflicts`].
//!
//! ```
//! use rulewright_engine::{RuleCategory, RuleParser};
//!
//! let parser = RuleParser::new();
//! let rule = parser.parse("All Python files should be limited to 200 lines").unwrap();
//! assert_eq!(rule.category, Some(RuleCategory::FileLimits));
//! assert!(parser.parse("the sky is blue").is_none());
//! ```

pub mod aliases;
pub mod builder;
pub mod conflicts;
pub mod extract;
pub mod matcher;
pub mod parser;
pub mod registry;
pub mod review;
pub mod rule;
pub mod validation;

pub use aliases::canonical_file_type;
pub use builder::RuleBuilder;
pub use conflicts::detect_conflicts;
pub use matcher::{match_statement, CategoryMatch};
pub use parser::RuleParser;
pub use registry::PatternRegistry;
pub use rule::{
    FileLimitParams, FileType, NotificationParams, Priority, RoleParams, Rule, RuleCategory,
    RuleParameters, RuleStatus, WorkflowParams,
};
pub use validation::{validate, RequiredField, ValidationIssue, ValidationReport};
