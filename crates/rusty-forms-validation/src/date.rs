//! Calendar date validation

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid ISO date regex"));

static DAY_FIRST_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})[-/.](\d{1,2})[-/.](\d{4})$").expect("valid day-first date regex")
});

fn calendar_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Parses `YYYY-M-D` (month and day may be one or two digits) and checks that the
/// date exists in the calendar.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let parts = ISO_DATE.captures(value)?;
    calendar_date(&parts[1], &parts[2], &parts[3])
}

/// True if `value` is a `YYYY-M-D` date that exists in the calendar.
pub fn is_valid_date(value: &str) -> bool {
    parse_iso_date(value).is_some()
}

/// Normalizes `Y-m-d`, `d-m-Y`, `d/m/Y` and `d.m.Y` dates to `YYYY-MM-DD`.
///
/// Returns `None` when the text is not a date in one of these layouts or the date
/// does not exist.
pub fn normalize_date(value: &str) -> Option<String> {
    let date = match parse_iso_date(value) {
        Some(date) => date,
        None => {
            let parts = DAY_FIRST_DATE.captures(value)?;
            calendar_date(&parts[3], &parts[2], &parts[1])?
        }
    };

    Some(date.format("%Y-%m-%d").to_string())
}
