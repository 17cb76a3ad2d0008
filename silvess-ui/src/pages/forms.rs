//! Form field helpers shared by the pages
//!
//! Decimal input goes through `Formatter::parse_decimal` so it follows the
//! configured locale.

pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Blank fields are sent as absent
pub fn non_empty(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Local date as the backend expects it, `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
