//! Shared constants for the Rulewright rule engine.

/// Rulewright version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of every generated rule identifier.
pub const RULE_ID_PREFIX: &str = "UR";

/// `created_by` value stamped on every rule.
pub const DEFAULT_CREATED_BY: &str = "user";

/// Role assigned to single-group collaboration statements.
pub const FRAMEWORK_ROLE: &str = "framework";

/// Scope stamped on file limit rules.
pub const FILE_LIMITS_SCOPE: &str = "all_repositories";

/// Scope stamped on workflow requirement rules.
pub const WORKFLOW_SCOPE: &str = "all_operations";

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "rulewright.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "RULEWRIGHT_LOG";

/// Filter used when `RULEWRIGHT_LOG` is unset or invalid.
pub const DEFAULT_LOG_DIRECTIVES: &str = "rulewright_core=warn,rulewright_engine=info";

// ---- Review ----

/// Source size (in characters) above which the gatekeeper flags a file.
pub const DEFAULT_MAX_SOURCE_CHARS: usize = 5000;

// ---- Context buffer ----

/// How many trailing characters of each diff are kept.
pub const DEFAULT_DIFF_TAIL_CHARS: usize = 1800;

/// Maximum size of the rolling context summary, in characters.
pub const DEFAULT_CONTEXT_MAX_CHARS: usize = 4000;

/// Initial content of a fresh context summary.
pub const DEFAULT_CONTEXT_HEADER: &str = "# Project Context (auto-updated)\n";
