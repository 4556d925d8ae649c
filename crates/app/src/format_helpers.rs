/// Shared formatting utilities for the UI layer.
///
/// Date functions accept ISO-8601 strings (e.g. "2026-01-20T21:35:00Z")
/// and produce human-readable output without external crate dependencies.
use shared_ui::components::BadgeVariant;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// Convert a snake_case string to Title Case (e.g. "parent_meeting" → "Parent Meeting").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a duration in seconds as "m:ss" (e.g. 754 → "12:34").
pub fn format_duration_mmss(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Badge color for a case risk level. Unrecognized values land in the
/// default bucket rather than failing.
pub fn risk_badge_variant(risk_level: &str) -> BadgeVariant {
    match risk_level.to_lowercase().as_str() {
        "low" => BadgeVariant::Secondary,
        "medium" => BadgeVariant::Warning,
        "high" => BadgeVariant::Primary,
        "critical" => BadgeVariant::Destructive,
        _ => BadgeVariant::Secondary,
    }
}

/// Badge color for a case status: seven fixed buckets keyed
/// case-insensitively, with a default for anything unrecognized.
pub fn status_badge_variant(status: &str) -> BadgeVariant {
    match status.to_lowercase().as_str() {
        "active" => BadgeVariant::Primary,
        "intake" => BadgeVariant::Primary,
        "assessment" => BadgeVariant::Outline,
        "intervention" => BadgeVariant::Warning,
        "monitoring" => BadgeVariant::Warning,
        "closed" => BadgeVariant::Secondary,
        _ => BadgeVariant::Secondary,
    }
}

/// Badge color for a goal status.
pub fn goal_status_badge_variant(status: &str) -> BadgeVariant {
    match status.to_lowercase().as_str() {
        "completed" => BadgeVariant::Success,
        "in_progress" => BadgeVariant::Primary,
        "not_started" => BadgeVariant::Secondary,
        _ => BadgeVariant::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_human_formats_iso_datetime() {
        assert_eq!(format_date_human("2026-01-20T21:35:00Z"), "Jan 20, 2026");
    }

    #[test]
    fn date_human_falls_back_on_short_input() {
        assert_eq!(format_date_human("2026"), "2026");
    }

    #[test]
    fn snake_case_title() {
        assert_eq!(format_snake_case_title("parent_meeting"), "Parent Meeting");
        assert_eq!(format_snake_case_title("crisis"), "Crisis");
    }

    #[test]
    fn duration_mmss() {
        assert_eq!(format_duration_mmss(754), "12:34");
        assert_eq!(format_duration_mmss(60), "1:00");
        assert_eq!(format_duration_mmss(9), "0:09");
        assert_eq!(format_duration_mmss(-5), "0:00");
    }

    #[test]
    fn status_buckets_are_case_insensitive() {
        assert_eq!(status_badge_variant("Active"), BadgeVariant::Primary);
        assert_eq!(status_badge_variant("CLOSED"), BadgeVariant::Secondary);
        assert_eq!(status_badge_variant("mystery"), BadgeVariant::Secondary);
    }

    #[test]
    fn risk_buckets_are_case_insensitive() {
        assert_eq!(risk_badge_variant("Critical"), BadgeVariant::Destructive);
        assert_eq!(risk_badge_variant("HIGH"), BadgeVariant::Primary);
        assert_eq!(risk_badge_variant("unknown"), BadgeVariant::Secondary);
    }
}
