//! Report date handling
//!
//! Reports carry plain calendar dates in `YYYY-MM-DD` form. Text that does
//! not parse is never an error here: callers either fall back to today (when
//! filing a report) or treat the date as absent (when matching).

use chrono::NaiveDate;

/// Format used for every report and claim date
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date, returning `None` for blank or malformed text
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, REPORT_DATE_FORMAT).ok()
}

/// Resolves the date typed on a report, falling back to `today`
pub fn resolve_report_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    raw.and_then(parse_report_date).unwrap_or(today)
}

/// Absolute number of days separating two dates
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_report_date("2025-01-10"), Some(date(2025, 1, 10)));
        assert_eq!(parse_report_date("  2025-01-10 "), Some(date(2025, 1, 10)));
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(parse_report_date(""), None);
        assert_eq!(parse_report_date("10/01/2025"), None);
        assert_eq!(parse_report_date("2025-02-30"), None);
        assert_eq!(parse_report_date("yesterday"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_today() {
        let today = date(2025, 3, 1);
        assert_eq!(resolve_report_date(None, today), today);
        assert_eq!(resolve_report_date(Some(""), today), today);
        assert_eq!(resolve_report_date(Some("not a date"), today), today);
        assert_eq!(resolve_report_date(Some("2025-02-27"), today), date(2025, 2, 27));
    }

    #[test]
    fn test_days_between_is_symmetric() {
        let a = date(2025, 1, 10);
        let b = date(2025, 1, 12);
        assert_eq!(days_between(a, b), 2);
        assert_eq!(days_between(b, a), 2);
        assert_eq!(days_between(a, a), 0);
    }
}
