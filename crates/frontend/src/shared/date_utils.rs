/// Utilities for date formatting
///
/// Дата с сервера может прийти как `2024-03-15`, как RFC 3339
/// (`2024-03-15T14:02:26.123Z`) или как HTTP-date
/// (`Fri, 15 Mar 2024 00:00:00 GMT`). В таблице и в `<input type="date">`
/// нужен `YYYY-MM-DD`.
use chrono::{DateTime, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// Format server date string to YYYY-MM-DD
/// Example: "Fri, 15 Mar 2024 00:00:00 GMT" -> "2024-03-15"
///
/// Нераспознанная строка возвращается как есть.
pub fn format_iso_date(date_str: &str) -> String {
    parse_server_date(date_str)
        .map(|d| d.format(ISO_DATE).to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Parse any of the server date representations into a calendar date
pub fn parse_server_date(date_str: &str) -> Option<NaiveDate> {
    let s = date_str.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, ISO_DATE) {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    // "2024-03-15T14:02:26" и подобное без зоны
    s.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, ISO_DATE).ok())
}
