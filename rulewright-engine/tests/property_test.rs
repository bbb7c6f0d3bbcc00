//! Property tests for classification and conflict detection.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use rulewright_engine::{
    detect_conflicts, FileLimitParams, FileType, RuleBuilder, RuleCategory, RuleParameters,
    RuleParser,
};

fn file_type_word() -> impl Strategy<Value = (&'static str, FileType)> {
    prop_oneof![
        Just(("Python", FileType::Py)),
        Just(("javascript", FileType::Js)),
        Just(("TypeScript", FileType::Ts)),
        Just(("shell", FileType::Sh)),
        Just(("bash", FileType::Sh)),
        Just(("py", FileType::Py)),
        Just(("md", FileType::Md)),
    ]
}

fn file_type_opt() -> impl Strategy<Value = Option<FileType>> {
    prop_oneof![
        Just(None),
        Just(Some(FileType::Py)),
        Just(Some(FileType::Js)),
        Just(Some(FileType::Ts)),
        Just(Some(FileType::Sh)),
        Just(Some(FileType::Md)),
    ]
}

proptest! {
    #[test]
    fn prop_number_lines_and_type_parse_as_file_limit(
        n in 1u64..1_000_000,
        (word, expected) in file_type_word(),
        maximum_form in any::<bool>(),
    ) {
        let statement = if maximum_form {
            format!("Maximum {n} lines for {word} files")
        } else {
            format!("All {word} files should be limited to {n} lines")
        };
        let rule = RuleParser::new().parse(&statement).unwrap();
        prop_assert_eq!(rule.category, Some(RuleCategory::FileLimits));
        match rule.parameters.unwrap() {
            RuleParameters::FileLimits(p) => {
                prop_assert_eq!(p.line_limit, n);
                prop_assert_eq!(p.file_type, Some(expected));
            }
            other => prop_assert!(false, "unexpected parameters {:?}", other),
        }
    }

    #[test]
    fn prop_conflict_rule_is_literal(a in file_type_opt(), b in file_type_opt()) {
        let build = |second: u32, file_type: Option<FileType>| {
            RuleBuilder::new().build_at(
                "limit",
                RuleParameters::FileLimits(FileLimitParams {
                    line_limit: 100,
                    scope: "all_repositories".to_string(),
                    file_type,
                }),
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, second).unwrap(),
            )
        };
        let candidate = build(1, a);
        let existing = vec![build(2, b)];
        let expected = a == b || a.is_none() || b.is_none();
        prop_assert_eq!(!detect_conflicts(&candidate, &existing).is_empty(), expected);
    }
}
