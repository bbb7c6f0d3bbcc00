use rulewright_core::constants::FRAMEWORK_ROLE;

use crate::rule::RoleParams;

/// `(<role>, <responsibility>)`, or a lone responsibility owned by the
/// framework itself.
pub fn extract_role_params(groups: &[Option<&str>]) -> Option<RoleParams> {
    let trimmed = |i: usize| {
        groups
            .get(i)
            .copied()
            .flatten()
            .unwrap_or_default()
            .trim()
            .to_string()
    };

    match groups.len() {
        0 => None,
        1 => Some(RoleParams {
            role: FRAMEWORK_ROLE.to_string(),
            responsibility: trimmed(0),
        }),
        _ => Some(RoleParams {
            role: trimmed(0),
            responsibility: trimmed(1),
        }),
    }
}
