/// Utilities for date and time formatting
///
/// Server timestamps are ISO 8601; they are shown in UTC in the
/// day-month-year order used across the app.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse(raw) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 02:02 PM"
pub fn format_datetime(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse(raw) {
        Some(dt) => dt.format("%d %b %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// "2024-03-15" -> "15 March 2024"
pub fn format_long_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse(raw) {
        Some(dt) => dt.format("%d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T23:30:00+05:30"), "15 Mar 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15 Mar 2024, 02:02 PM"
        );
        assert_eq!(format_datetime("2024-12-31"), "31 Dec 2024, 12:00 AM");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-03-05T10:00:00Z"), "05 March 2024");
    }

    #[test]
    fn test_invalid_and_empty() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime(""), "N/A");
        assert_eq!(format_optional_date(None), "N/A");
    }
}
