/// Utilities for working with calendar dates
///
/// The backend speaks `YYYY-MM-DD`; everything here parses or produces that format.
use chrono::{Datelike, Months, NaiveDate};

pub const ISO_DATE: &str = "%Y-%m-%d";

/// Parse `YYYY-MM-DD`, tolerating a trailing time part ("2024-03-15T00:00:00Z")
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, ISO_DATE).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Number of calendar days in `[start, end]`, both ends included.
/// Zero or negative when `end` precedes `start`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Default reporting period: one calendar month back from `today`, inclusive
pub fn default_period(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    (start, today)
}

/// Short axis label: "2024-03-15" -> "15 Mar"; anything unparsable is returned as is
pub fn format_axis_date(value: &str) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    match parse_iso_date(value) {
        Some(date) => format!("{} {}", date.day(), MONTHS[date.month0() as usize]),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-01-10"), Some(d(2024, 1, 10)));
        assert_eq!(parse_iso_date("2024-01-10T14:02:26Z"), Some(d(2024, 1, 10)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("10.01.2024"), None);
    }

    #[test]
    fn test_inclusive_days() {
        assert_eq!(inclusive_days(d(2024, 1, 1), d(2024, 1, 10)), 10);
        assert_eq!(inclusive_days(d(2024, 1, 1), d(2024, 1, 1)), 1);
        assert_eq!(inclusive_days(d(2024, 1, 5), d(2024, 1, 1)), -3);
        // leap year February
        assert_eq!(inclusive_days(d(2024, 2, 1), d(2024, 2, 29)), 29);
    }

    #[test]
    fn test_default_period() {
        assert_eq!(default_period(d(2024, 3, 31)), (d(2024, 2, 29), d(2024, 3, 31)));
        assert_eq!(default_period(d(2024, 1, 15)), (d(2023, 12, 15), d(2024, 1, 15)));
    }

    #[test]
    fn test_format_axis_date() {
        assert_eq!(format_axis_date("2024-03-15"), "15 Mar");
        assert_eq!(format_axis_date("2024-W11"), "2024-W11");
    }
}
