// 📅 Calendar Date - checked (year, month, day) value type
//
// A CalendarDate is only constructible through `new`, which round-trips the
// triple through chrono's NaiveDate. Holding one means the date is a real
// day in the proleptic Gregorian calendar.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// CALENDAR DATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Construct a CalendarDate, rejecting triples that do not denote a real
    /// date (Feb 30, day 31 in a 30-day month, Feb 29 outside leap years).
    ///
    /// The check is a round-trip through chrono: build a NaiveDate and read
    /// the components back. Overflow into a neighboring month fails here.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        if date.year() == year && date.month() == month && date.day() == day {
            Some(CalendarDate { year, month, day })
        } else {
            None
        }
    }

    /// Today according to the host's local calendar.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        CalendarDate {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

// ============================================================================
// CALENDAR HELPERS
// ============================================================================

/// Number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // unreachable for months 1-12; keeps the function total
    }
}

/// Gregorian leap-year rule:
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_dates_construct() {
        assert!(CalendarDate::new(2000, 1, 31).is_some());
        assert!(CalendarDate::new(2020, 2, 29).is_some()); // leap year
        assert!(CalendarDate::new(1, 1, 1).is_some()); // no lower bound on years
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert!(CalendarDate::new(2021, 2, 29).is_none()); // not a leap year
        assert!(CalendarDate::new(2000, 2, 30).is_none());
        assert!(CalendarDate::new(2000, 4, 31).is_none()); // 30-day month
        assert!(CalendarDate::new(2000, 13, 1).is_none());
        assert!(CalendarDate::new(2000, 0, 1).is_none());
        assert!(CalendarDate::new(2000, 1, 0).is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29); // leap
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(1900)); // divisible by 100, not 400
        assert!(!is_leap_year(2021));
    }

    #[test]
    fn test_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(1992, 6, 14).unwrap();
        let cal: CalendarDate = date.into();
        assert_eq!(cal, CalendarDate::new(1992, 6, 14).unwrap());
    }
}
