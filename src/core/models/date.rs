//! Calendar date helpers

use chrono::{Days, NaiveDate};

/// Parse a calendar date from a date or timestamp string
///
/// Accepts `YYYY-MM-DD` and any timestamp whose part before `T` is such a
/// date (`2026-06-14T00:00:00Z`). The time of day is dropped. Returns `None`
/// for anything else.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let day = value.split_once('T').map_or(value, |(day, _)| day);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// `date + days`, saturating at the last representable date
#[must_use]
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days))).unwrap_or(NaiveDate::MAX)
}
