//! Custom pattern registries.

use rulewright_core::config::{ParserConfig, PatternDef, RulewrightConfig};
use rulewright_core::errors::{RegistryError, RulewrightErrorCode};
use rulewright_engine::{FileType, PatternRegistry, RuleCategory, RuleParameters, RuleParser};

#[test]
fn test_custom_pattern_extends_file_limits() {
    let registry = PatternRegistry::from_toml_str(
        r#"
[[patterns]]
category = "file_limits"
pattern = 'cap\s+(.*?)\s+files?\s+at\s+(\d+)'
"#,
    )
    .unwrap();
    let parser = RuleParser::with_registry(registry);

    let rule = parser.parse("Cap TypeScript files at 350").unwrap();
    assert_eq!(rule.category, Some(RuleCategory::FileLimits));
    match rule.parameters.unwrap() {
        RuleParameters::FileLimits(p) => {
            assert_eq!(p.line_limit, 350);
            assert_eq!(p.file_type, Some(FileType::Ts));
        }
        other => panic!("unexpected parameters {other:?}"),
    }

    // The built-in parser does not know this phrasing.
    assert!(RuleParser::new().parse("Cap TypeScript files at 350").is_none());
}

#[test]
fn test_builtin_patterns_keep_precedence_over_custom() {
    let registry = PatternRegistry::with_custom(&[PatternDef::new(
        "workflow_requirements",
        r"(ping)\s+(.*)$",
    )])
    .unwrap();
    let parser = RuleParser::with_registry(registry);

    // Built-in `always` pattern is still tried first within the category.
    let m = parser.classify("always ping the channel").unwrap();
    assert_eq!(m.category, RuleCategory::WorkflowRequirements);
    assert_eq!(m.pattern_index, 2);

    let m = parser.classify("ping the channel").unwrap();
    assert_eq!(m.pattern_index, 4);
}

#[test]
fn test_unknown_category_rejected() {
    let err = PatternRegistry::with_custom(&[PatternDef::new("deploy_windows", "deploy (.*)")])
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnknownCategory { ref category, .. } if category == "deploy_windows"));
    assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
}

#[test]
fn test_invalid_regex_rejected() {
    let err = PatternRegistry::with_custom(&[PatternDef::new("file_limits", r"limit (\d+")])
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidPattern { .. }));
}

#[test]
fn test_malformed_pattern_file() {
    let err = PatternRegistry::from_toml_str("[[patterns]]\ncategory = ").unwrap_err();
    assert!(matches!(err, RegistryError::ParseError(_)));
}

#[test]
fn test_parser_from_config() {
    let config = RulewrightConfig::from_toml(
        r#"
[[parser.custom_patterns]]
category = "collaboration_roles"
pattern = '(reviewers)\s+handle\s+(.*?)$'
"#,
    )
    .unwrap();
    let parser = RuleParser::from_config(&config.parser).unwrap();
    assert_eq!(parser.registry().pattern_count(), 14);

    let rule = parser.parse("Reviewers handle dependency upgrades").unwrap();
    match rule.parameters.unwrap() {
        RuleParameters::CollaborationRoles(p) => {
            assert_eq!(p.role, "Reviewers");
            assert_eq!(p.responsibility, "dependency upgrades");
        }
        other => panic!("unexpected parameters {other:?}"),
    }

    let plain = RuleParser::from_config(&ParserConfig::default()).unwrap();
    assert_eq!(plain.registry().pattern_count(), 13);
}
