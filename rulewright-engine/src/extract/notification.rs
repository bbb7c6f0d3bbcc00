use super::{is_numeric, parse_numeric};
use crate::rule::NotificationParams;

/// `(<n>, <unit>)` → frequency normalized to seconds; a single group →
/// free-text conditions; anything else fails.
pub fn extract_notification_params(groups: &[Option<&str>]) -> Option<NotificationParams> {
    let first = groups.first().copied().flatten();

    if groups.len() >= 2 && first.is_some_and(is_numeric) {
        let frequency = parse_numeric(first?)?;
        let unit = groups[1].unwrap_or_default().to_lowercase();
        let multiplier = if unit.contains("minute") {
            60
        } else if unit.contains("hour") {
            3600
        } else {
            1
        };
        return Some(NotificationParams {
            frequency_seconds: Some(frequency.checked_mul(multiplier)?),
            frequency: Some(format!("{frequency} {unit}")),
            conditions: None,
        });
    }

    if groups.len() == 1 {
        return first.map(|g| NotificationParams {
            conditions: Some(g.trim().to_string()),
            ..Default::default()
        });
    }

    None
}
