//! Rule validation and conflict detection.

use chrono::{DateTime, TimeZone, Utc};

use rulewright_engine::{
    detect_conflicts, validate, FileLimitParams, FileType, RequiredField, Rule, RuleBuilder,
    RuleParameters, RuleParser, ValidationIssue, WorkflowParams,
};

fn at(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, second).unwrap()
}

fn file_limit_rule(second: u32, file_type: Option<FileType>) -> Rule {
    RuleBuilder::new().build_at(
        "file limit",
        RuleParameters::FileLimits(FileLimitParams {
            line_limit: 200,
            scope: "all_repositories".to_string(),
            file_type,
        }),
        at(second),
    )
}

fn workflow_rule(second: u32) -> Rule {
    RuleBuilder::new().build_at(
        "always run tests",
        RuleParameters::WorkflowRequirements(WorkflowParams {
            scope: "all_operations".to_string(),
            required_action: Some("run tests".to_string()),
            trigger_condition: None,
        }),
        at(second),
    )
}

#[test]
fn test_both_untyped_file_limits_conflict() {
    let existing = vec![file_limit_rule(1, None)];
    let candidate = file_limit_rule(2, None);
    assert_eq!(detect_conflicts(&candidate, &existing), vec!["UR-20240310090001"]);
}

#[test]
fn test_different_explicit_types_do_not_conflict() {
    let existing = vec![file_limit_rule(1, Some(FileType::Js))];
    let candidate = file_limit_rule(2, Some(FileType::Py));
    assert!(detect_conflicts(&candidate, &existing).is_empty());
}

#[test]
fn test_same_type_conflicts() {
    let existing = vec![file_limit_rule(1, Some(FileType::Py))];
    let candidate = file_limit_rule(2, Some(FileType::Py));
    assert_eq!(detect_conflicts(&candidate, &existing).len(), 1);
}

#[test]
fn test_untyped_side_overlaps_everything_in_corpus_order() {
    let existing = vec![
        file_limit_rule(1, Some(FileType::Py)),
        workflow_rule(2),
        file_limit_rule(3, None),
        file_limit_rule(4, Some(FileType::Sh)),
    ];

    let untyped = file_limit_rule(10, None);
    assert_eq!(
        detect_conflicts(&untyped, &existing),
        vec!["UR-20240310090001", "UR-20240310090003", "UR-20240310090004"]
    );

    let typed = file_limit_rule(11, Some(FileType::Sh));
    assert_eq!(
        detect_conflicts(&typed, &existing),
        vec!["UR-20240310090003", "UR-20240310090004"]
    );
}

#[test]
fn test_other_categories_never_conflict() {
    let existing = vec![workflow_rule(1), file_limit_rule(2, None)];
    assert!(detect_conflicts(&workflow_rule(3), &existing).is_empty());
}

#[test]
fn test_valid_rule_without_corpus() {
    let rule = RuleParser::new()
        .parse("All Python files should be limited to 200 lines")
        .unwrap();
    let report = validate(&rule, &[]);
    assert!(report.is_valid);
    assert!(report.issues.is_empty());
}

#[test]
fn test_missing_parameters_reported() {
    let rule = Rule::from_json(
        r#"{
            "rule_id": "UR-20240101000000",
            "category": "file_limits",
            "description": "All Python files should be limited to 200 lines",
            "created_date": "2024-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();
    assert!(rule.parameters.is_none());

    let report = validate(&rule, &[]);
    assert!(!report.is_valid);
    assert_eq!(
        report.issues,
        vec![ValidationIssue::MissingField(RequiredField::Parameters)]
    );
    assert_eq!(report.messages(), vec!["Missing required field: parameters"]);
}

#[test]
fn test_every_missing_field_listed_in_order() {
    let rule = Rule::from_json(r#"{ "created_date": "2024-01-01T00:00:00Z" }"#).unwrap();
    let report = validate(&rule, &[]);
    assert_eq!(
        report.messages(),
        vec![
            "Missing required field: rule_id",
            "Missing required field: category",
            "Missing required field: description",
            "Missing required field: parameters",
        ]
    );
}

#[test]
fn test_empty_parameter_mapping_counts_as_present() {
    let rule = Rule::from_json(
        r#"{
            "rule_id": "UR-20240101000000",
            "category": "notification_preferences",
            "description": "notify",
            "created_date": "2024-01-01T00:00:00Z",
            "parameters": {}
        }"#,
    )
    .unwrap();
    assert!(validate(&rule, &[]).is_valid);
}

#[test]
fn test_conflicts_become_issues_without_mutating_rule() {
    let existing = vec![file_limit_rule(1, Some(FileType::Py)), file_limit_rule(2, None)];
    let candidate = file_limit_rule(3, Some(FileType::Py));
    let before = candidate.clone();

    let report = validate(&candidate, &existing);
    assert!(!report.is_valid);
    assert_eq!(
        report.messages(),
        vec![
            "Conflict with rule UR-20240310090001",
            "Conflict with rule UR-20240310090002",
        ]
    );
    assert_eq!(candidate, before);
    assert!(candidate.conflicts.is_empty());
}

#[test]
fn test_missing_fields_precede_conflicts() {
    let mut candidate = file_limit_rule(5, None);
    candidate.description = "  ".to_string();
    let report = validate(&candidate, &[file_limit_rule(1, None)]);
    assert_eq!(
        report.messages(),
        vec![
            "Missing required field: description",
            "Conflict with rule UR-20240310090001",
        ]
    );
}

#[test]
fn test_candidate_without_parameters_treated_as_untyped() {
    let mut candidate = file_limit_rule(5, Some(FileType::Py));
    candidate.parameters = None;
    let existing = vec![file_limit_rule(1, Some(FileType::Js))];
    assert_eq!(detect_conflicts(&candidate, &existing), vec!["UR-20240310090001"]);
}

#[test]
fn test_report_serializes_issue_strings() {
    let existing = vec![file_limit_rule(1, None)];
    let report = validate(&file_limit_rule(2, None), &existing);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["issues"][0], "Conflict with rule UR-20240310090001");
}
