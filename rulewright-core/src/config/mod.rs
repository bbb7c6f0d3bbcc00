//! Configuration system for Rulewright.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod context_config;
pub mod parser_config;
pub mod review_config;
pub mod rulewright_config;

pub use context_config::ContextConfig;
pub use parser_config::{ParserConfig, PatternDef};
pub use review_config::ReviewConfig;
pub use rulewright_config::RulewrightConfig;
