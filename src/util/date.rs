//! Display formatting for API date strings.
//!
//! The backend serializes timestamps in a handful of ISO-like shapes
//! depending on the column type, so parsing tries each in turn. Anything
//! unparseable (including the empty string) degrades to a placeholder
//! instead of erroring; these helpers are used directly in views and must
//! never panic.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown for missing or unparseable dates.
const PLACEHOLDER: &str = "-";

/// Format an ISO-like date string as `DD.MM.YYYY`.
///
/// Returns `-` when the input is empty or cannot be parsed.
pub fn format_date(input: &str) -> String {
    parse(input).map_or_else(|| PLACEHOLDER.to_owned(), |dt| dt.format("%d.%m.%Y").to_string())
}

/// Format an ISO-like date string as `DD.MM.YYYY HH:MM` (24-hour).
///
/// Returns `-` when the input is empty or cannot be parsed.
pub fn format_date_time(input: &str) -> String {
    parse(input).map_or_else(
        || PLACEHOLDER.to_owned(),
        |dt| dt.format("%d.%m.%Y %H:%M").to_string(),
    )
}

/// Try the timestamp shapes the API actually emits, most specific first.
/// Bare dates parse to midnight so both formatters accept either shape.
fn parse(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
