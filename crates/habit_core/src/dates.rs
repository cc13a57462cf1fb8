//! Calendar-day helpers shared by progress math and the habit service.
//!
//! # Invariants
//! - Day strings are always `YYYY-MM-DD`.
//! - Day boundaries are UTC; only the greeting uses the local clock.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Timelike, Utc};

/// `strftime` pattern of every persisted day string.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Short weekday names, Sunday first.
pub const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Truncates an instant to its UTC calendar day.
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format_day(instant.with_timezone(&Utc).date_naive())
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` day string.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Current UTC calendar day.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn get_today_string() -> String {
    format_day(today())
}

pub fn is_today(date: &str) -> bool {
    date == get_today_string()
}

/// Returns the day `days` calendar days before `day`.
///
/// `None` only when the result falls outside the representable range.
pub fn days_before(day: NaiveDate, days: u64) -> Option<NaiveDate> {
    day.checked_sub_days(Days::new(days))
}

/// Number of days in `month` (1..=12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// English month name for `month` (1..=12).
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Greeting for the current local hour.
pub fn get_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[cfg(test)]
mod tests {
    use super::{
        days_before, days_in_month, format_date, format_day, get_today_string, greeting_for_hour,
        is_today, month_name, parse_day,
    };
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn format_date_uses_utc_day() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tokyo.with_ymd_and_hms(2026, 3, 1, 7, 0, 0).unwrap();
        assert_eq!(format_date(&instant), "2026-02-28");

        let utc = Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 59).unwrap();
        assert_eq!(format_date(&utc), "2026-03-01");
    }

    #[test]
    fn parse_day_round_trips_and_rejects_garbage() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_day(&format_day(day)), Some(day));
        assert_eq!(parse_day("2023-02-29"), None);
        assert_eq!(parse_day("yesterday"), None);
    }

    #[test]
    fn days_before_crosses_month_and_year() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(
            days_before(day, 3),
            NaiveDate::from_ymd_opt(2025, 12, 30)
        );
        assert_eq!(days_before(day, 0), Some(day));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2026, 2), Some(28));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 13), None);
    }

    #[test]
    fn month_name_is_one_based() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn greeting_buckets() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(16), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn is_today_matches_today_string() {
        assert!(is_today(&get_today_string()));
        assert!(!is_today("1999-01-01"));
    }
}
