//! Locale-aware display formatting
//!
//! Currency, numbers and dates rendered the way the dashboard shows them
//! (pt-BR by default). Dates arrive from the backend as plain strings in
//! several shapes; anything unparseable is shown as-is.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::LocaleConfig;

#[derive(Debug, Clone)]
pub struct Formatter {
    currency_symbol: String,
    decimal_separator: char,
    thousands_separator: char,
    date_format: String,
    date_time_format: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(&LocaleConfig::default())
    }
}

impl Formatter {
    pub fn new(locale: &LocaleConfig) -> Self {
        Self {
            currency_symbol: locale.currency_symbol.clone(),
            decimal_separator: locale.decimal_separator,
            thousands_separator: locale.thousands_separator,
            date_format: locale.date_format.clone(),
            date_time_format: locale.date_time_format.clone(),
        }
    }

    /// `1234.5` -> `R$ 1.234,50`
    pub fn currency(&self, value: f64) -> String {
        let body = self.decimal(value.abs(), 2);
        if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            format!("-{} {}", self.currency_symbol, body)
        } else {
            format!("{} {}", self.currency_symbol, body)
        }
    }

    /// Grouped number with a fixed number of decimal places
    pub fn decimal(&self, value: f64, places: usize) -> String {
        let rendered = format!("{:.*}", places, value.abs());
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (rendered.as_str(), None),
        };

        let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
        if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(c);
        }
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    /// Quantity with up to three decimals, trailing zeros dropped
    pub fn quantity(&self, value: f64) -> String {
        let text = self.decimal(value, 3);
        if !text.contains(self.decimal_separator) {
            return text;
        }
        let trimmed = text.trim_end_matches('0');
        trimmed
            .strip_suffix(self.decimal_separator)
            .unwrap_or(trimmed)
            .to_string()
    }

    /// `12.34` -> `12.3%`
    pub fn percent(&self, value: f64) -> String {
        format!("{:.1}%", value)
    }

    /// Reads a number typed into a form
    ///
    /// Accepts the locale's own display form (`1.234,50`, optionally with the
    /// currency symbol) as well as a plain `12.5`. Without a decimal
    /// separator, a lone `.` is taken as the decimal point.
    pub fn parse_decimal(&self, raw: &str) -> Option<f64> {
        let text = raw.trim();
        let text = text
            .strip_prefix(self.currency_symbol.as_str())
            .unwrap_or(text)
            .trim_start();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let allowed = |c: char| {
            c.is_ascii_digit()
                || c == '.'
                || c == self.decimal_separator
                || c == self.thousands_separator
        };
        if body.is_empty() || !body.chars().all(allowed) {
            return None;
        }

        let value: f64 = match body.split_once(self.decimal_separator) {
            Some((int_part, frac)) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                format!("{}.{}", self.ungroup(int_part)?, frac).parse().ok()?
            }
            None => body
                .parse()
                .ok()
                .or_else(|| self.ungroup(body)?.parse().ok())?,
        };

        let value = if negative { -value } else { value };
        value.is_finite().then_some(value)
    }

    /// `1.234` -> `1234`; groups after the first must have three digits
    fn ungroup(&self, int_part: &str) -> Option<String> {
        let mut groups = int_part.split(self.thousands_separator);
        let head = groups.next().unwrap_or_default();
        let mut out = head.to_string();
        for group in groups {
            if head.is_empty() || head.len() > 3 || group.len() != 3 {
                return None;
            }
            out.push_str(group);
        }
        out.chars().all(|c| c.is_ascii_digit()).then_some(out)
    }

    /// `2024-03-05` -> `05/03/2024`
    pub fn date(&self, raw: &str) -> String {
        match parse_timestamp(raw) {
            Some(ts) => ts.format(&self.date_format).to_string(),
            None => raw.to_string(),
        }
    }

    /// `2024-03-05 14:30:00` -> `05/03/2024, 14:30`
    pub fn date_time(&self, raw: &str) -> String {
        match parse_timestamp(raw) {
            Some(ts) => ts.format(&self.date_time_format).to_string(),
            None => raw.to_string(),
        }
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 and SQLite's `YYYY-MM-DD HH:MM:SS`
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        let f = Formatter::default();
        assert_eq!(f.currency(1234.5), "R$ 1.234,50");
        assert_eq!(f.currency(0.0), "R$ 0,00");
        assert_eq!(f.currency(12.0), "R$ 12,00");
        assert_eq!(f.currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn test_negative_currency() {
        let f = Formatter::default();
        assert_eq!(f.currency(-35.9), "-R$ 35,90");
        assert_eq!(f.currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_quantity_trims_zeros() {
        let f = Formatter::default();
        assert_eq!(f.quantity(2.5), "2,5");
        assert_eq!(f.quantity(120.0), "120");
        assert_eq!(f.quantity(1500.25), "1.500,25");
        assert_eq!(f.quantity(-0.5), "-0,5");
    }

    #[test]
    fn test_parse_decimal_reads_display_form() {
        let f = Formatter::default();
        assert_eq!(f.parse_decimal("1.234,50"), Some(1234.5));
        assert_eq!(f.parse_decimal(&f.currency(1234.5)), Some(1234.5));
        assert_eq!(f.parse_decimal(&f.quantity(1500.25)), Some(1500.25));
        assert_eq!(f.parse_decimal("12,5"), Some(12.5));
        assert_eq!(f.parse_decimal(" 3.25 "), Some(3.25));
        assert_eq!(f.parse_decimal("-2,5"), Some(-2.5));
        assert_eq!(f.parse_decimal("1.000.000,00"), Some(1_000_000.0));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        let f = Formatter::default();
        assert_eq!(f.parse_decimal(""), None);
        assert_eq!(f.parse_decimal("abc"), None);
        assert_eq!(f.parse_decimal("NaN"), None);
        assert_eq!(f.parse_decimal("inf"), None);
        assert_eq!(f.parse_decimal("1.23,5"), None);
        assert_eq!(f.parse_decimal("1,2,3"), None);
    }

    #[test]
    fn test_parse_decimal_custom_locale() {
        let f = Formatter::new(&LocaleConfig {
            currency_symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            date_format: "%Y/%m/%d".to_string(),
            date_time_format: "%Y/%m/%d %H:%M".to_string(),
        });
        assert_eq!(f.parse_decimal("1,234.50"), Some(1234.5));
        assert_eq!(f.parse_decimal("1,234"), Some(1234.0));
        assert_eq!(f.parse_decimal("$ 12.5"), Some(12.5));
    }

    #[test]
    fn test_percent() {
        let f = Formatter::default();
        assert_eq!(f.percent(12.34), "12.3%");
        assert_eq!(f.percent(0.0), "0.0%");
    }

    #[test]
    fn test_dates() {
        let f = Formatter::default();
        assert_eq!(f.date("2024-03-05"), "05/03/2024");
        assert_eq!(f.date("2024-03-05 14:30:00"), "05/03/2024");
        assert_eq!(f.date("2024-03-05T14:30:00Z"), "05/03/2024");
        assert_eq!(f.date_time("2024-03-05 14:30:00"), "05/03/2024, 14:30");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let f = Formatter::default();
        assert_eq!(f.date("ontem"), "ontem");
        assert_eq!(f.date_time(""), "");
    }

    #[test]
    fn test_custom_locale() {
        let f = Formatter::new(&LocaleConfig {
            currency_symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            date_format: "%Y/%m/%d".to_string(),
            date_time_format: "%Y/%m/%d %H:%M".to_string(),
        });
        assert_eq!(f.currency(1234.5), "$ 1,234.50");
        assert_eq!(f.date("2024-03-05"), "2024/03/05");
    }
}
