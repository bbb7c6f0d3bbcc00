use rulewright_core::constants::WORKFLOW_SCOPE;

use crate::rule::WorkflowParams;

/// Never fails: the scope is always present.
pub fn extract_workflow_params(groups: &[Option<&str>]) -> WorkflowParams {
    let trimmed = |i: usize| groups.get(i).copied().flatten().map(|g| g.trim().to_string());

    let mut params = WorkflowParams {
        scope: WORKFLOW_SCOPE.to_string(),
        required_action: None,
        trigger_condition: None,
    };
    match groups.len() {
        0 => {}
        1 => params.required_action = trimmed(0),
        _ => {
            params.required_action = trimmed(0);
            params.trigger_condition = trimmed(1);
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_groups() {
        let p = extract_workflow_params(&[Some(" code review "), Some("any merge ")]);
        assert_eq!(p.scope, "all_operations");
        assert_eq!(p.required_action.as_deref(), Some("code review"));
        assert_eq!(p.trigger_condition.as_deref(), Some("any merge"));
    }

    #[test]
    fn test_single_group() {
        let p = extract_workflow_params(&[Some("run lint")]);
        assert_eq!(p.required_action.as_deref(), Some("run lint"));
        assert_eq!(p.trigger_condition, None);
    }

    #[test]
    fn test_no_groups_keeps_scope() {
        let p = extract_workflow_params(&[]);
        assert_eq!(p.scope, "all_operations");
        assert_eq!(p.required_action, None);
    }
}
