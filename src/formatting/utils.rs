use chrono::{DateTime, FixedOffset, Utc};

pub fn extract_first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Parses tracker timestamps, which use a colon-less offset ("+0000"),
/// falling back to RFC 3339.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(timestamp))
        .ok()
}

/// "Mar 4" style date used on cards and board tiles.
pub fn format_short_date(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|parsed| parsed.format("%b %-d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn format_relative_time(timestamp: &str) -> String {
    format_relative_time_from(timestamp, Utc::now())
}

pub fn format_relative_time_from(timestamp: &str, now: DateTime<Utc>) -> String {
    if let Some(parsed) = parse_timestamp(timestamp) {
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}y ago", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}mo ago", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{}m ago", duration.num_minutes())
        } else {
            "just now".to_string()
        }
    } else {
        "unknown".to_string()
    }
}

/// Truncates on a character boundary, appending "..." when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
