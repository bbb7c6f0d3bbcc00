//! Long-form file type names → canonical short codes.

use crate::rule::FileType;

/// Static alias table. Short codes pass through via `canonical_file_type`.
pub const FILE_TYPE_ALIASES: &[(&str, FileType)] = &[
    ("python", FileType::Py),
    ("javascript", FileType::Js),
    ("typescript", FileType::Ts),
    ("shell", FileType::Sh),
    ("bash", FileType::Sh),
    ("markdown", FileType::Md),
];

/// Canonicalize a file type token (case-insensitive).
pub fn canonical_file_type(token: &str) -> Option<FileType> {
    let token = token.trim().to_ascii_lowercase();
    if let Some((_, ft)) = FILE_TYPE_ALIASES.iter().find(|(alias, _)| *alias == token) {
        return Some(*ft);
    }
    match token.as_str() {
        "py" => Some(FileType::Py),
        "js" => Some(FileType::Js),
        "ts" => Some(FileType::Ts),
        "sh" => Some(FileType::Sh),
        "md" => Some(FileType::Md),
        _ => None,
    }
}
