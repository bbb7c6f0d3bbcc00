use std::sync::LazyLock;

use regex::Regex;

use rulewright_core::constants::FILE_LIMITS_SCOPE;

use super::{is_numeric, parse_numeric};
use crate::aliases::canonical_file_type;
use crate::rule::FileLimitParams;

/// File type tokens recognized inside a matched group. `markdown` is
/// not a token; only the `md` code is recognized.
static FILE_TYPE_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(python|javascript|typescript|shell|bash|py|js|ts|sh|md)\b").ok()
});

/// Numeric groups become `line_limit`, other groups are scanned for a file
/// type token. Later groups win. A missing or zero limit fails.
pub fn extract_file_limit_params(groups: &[Option<&str>]) -> Option<FileLimitParams> {
    let mut line_limit = None;
    let mut file_type = None;

    for group in groups.iter().flatten().filter(|g| !g.is_empty()) {
        if is_numeric(group) {
            if let Some(n) = parse_numeric(group) {
                line_limit = Some(n);
            }
            continue;
        }
        let Some(token_re) = FILE_TYPE_TOKEN.as_ref() else {
            continue;
        };
        let lowered = group.to_lowercase();
        if let Some(token) = token_re.captures(&lowered).and_then(|c| c.get(1)) {
            file_type = canonical_file_type(token.as_str());
        }
    }

    let line_limit = line_limit.filter(|n| *n > 0)?;
    Some(FileLimitParams {
        line_limit,
        scope: FILE_LIMITS_SCOPE.to_string(),
        file_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::FileType;

    #[test]
    fn test_limit_and_type() {
        let p = extract_file_limit_params(&[Some("All Python"), Some("200")]).unwrap();
        assert_eq!(p.line_limit, 200);
        assert_eq!(p.file_type, Some(FileType::Py));
        assert_eq!(p.scope, "all_repositories");
    }

    #[test]
    fn test_word_boundary_required() {
        // "pyramid" must not read as "py".
        let p = extract_file_limit_params(&[Some("pyramid"), Some("50")]).unwrap();
        assert_eq!(p.file_type, None);
    }

    #[test]
    fn test_no_number_fails() {
        assert!(extract_file_limit_params(&[Some("python"), Some("")]).is_none());
        assert!(extract_file_limit_params(&[Some("python"), None]).is_none());
    }

    #[test]
    fn test_zero_limit_fails() {
        assert!(extract_file_limit_params(&[Some("python"), Some("0")]).is_none());
    }

    #[test]
    fn test_overflowing_number_is_not_a_limit() {
        assert!(extract_file_limit_params(&[Some("py"), Some("99999999999999999999999")]).is_none());
    }

    #[test]
    fn test_fullwidth_limit() {
        let p = extract_file_limit_params(&[Some("Python"), Some("\u{FF12}\u{FF10}\u{FF10}")]).unwrap();
        assert_eq!(p.line_limit, 200);
        assert_eq!(p.file_type, Some(FileType::Py));
    }

    #[test]
    fn test_markdown_word_not_recognized() {
        let p = extract_file_limit_params(&[Some("markdown"), Some("80")]).unwrap();
        assert_eq!(p.file_type, None);
        let p = extract_file_limit_params(&[Some("md"), Some("80")]).unwrap();
        assert_eq!(p.file_type, Some(FileType::Md));
    }
}
