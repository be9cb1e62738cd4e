//! Parsing of the free-form display dates events are published with.

use chrono::NaiveDate;

const LONG_FORMATS: [&str; 2] = ["%B %d, %Y", "%B %d %Y"];

/// Resolves a display date such as `May 15, 2025`, `Sep 8, 2025`,
/// `June 10-12, 2025` or `2025-01-01` to a calendar date.
///
/// Day ranges resolve to their first day.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    let single_day = strip_day_range(trimmed);
    LONG_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&single_day, fmt).ok())
}

fn strip_day_range(raw: &str) -> String {
    match raw.split_once(',') {
        Some((head, year)) => {
            let first_day = head.split(['-', '\u{2013}']).next().unwrap_or(head).trim_end();
            format!("{},{}", first_day, year)
        }
        None => raw.to_string(),
    }
}
