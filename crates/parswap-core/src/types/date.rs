//! Date type for swap schedule arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date with no time-of-day component.
///
/// Newtype wrapper around `chrono::NaiveDate`. All arithmetic is in whole
/// days; month stepping clamps to the last day of the target month instead of
/// normalizing into the month after.
///
/// # Example
///
/// ```rust
/// use parswap_core::types::Date;
///
/// let date = Date::from_ymd(2021, 8, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2021, 9, 30).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// The day of month is preserved when the target month is long enough,
    /// otherwise it is clamped to the target month's last day. Adding one
    /// month to January 31 gives the last day of February, never a date in
    /// March.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Signed calendar day count from `self` to `other` (`other - self`).
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the first day of the following month.
    #[must_use]
    pub fn first_of_next_month(&self) -> Self {
        self.add_days(i64::from(self.days_in_month() - self.day() + 1))
    }

    /// Returns true if both dates fall in the same calendar month of the same year.
    #[must_use]
    pub fn same_month(&self, other: &Date) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The 10-character `YYYY-MM-DD` key used by fixing tables.
    #[must_use]
    pub fn iso_key(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2021, 12, 20).unwrap();
        assert_eq!(date.year(), 2021);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::parse("2021/12/20").is_err());
        assert!(Date::parse("not a date").is_err());
    }

    #[test]
    fn test_add_months_preserves_day() {
        assert_eq!(d("2016-12-19").add_months(3).unwrap(), d("2017-03-19"));
        assert_eq!(d("2021-12-20").add_months(240).unwrap(), d("2041-12-20"));
    }

    #[test]
    fn test_add_months_clamps_end_of_month() {
        assert_eq!(d("2021-01-31").add_months(1).unwrap(), d("2021-02-28"));
        assert_eq!(d("2024-01-31").add_months(1).unwrap(), d("2024-02-29"));
        assert_eq!(d("2021-08-31").add_months(1).unwrap(), d("2021-09-30"));
        assert_eq!(d("2021-03-30").add_months(-1).unwrap(), d("2021-02-28"));
    }

    #[test]
    fn test_add_months_negative_crosses_year() {
        assert_eq!(d("2022-01-15").add_months(-1).unwrap(), d("2021-12-15"));
        assert_eq!(d("2022-02-28").add_months(-14).unwrap(), d("2020-12-28"));
    }

    #[test]
    fn test_days_between_is_signed() {
        let d1 = d("2021-12-20");
        let d2 = d("2022-03-21");
        assert_eq!(d1.days_between(&d2), 91);
        assert_eq!(d2.days_between(&d1), -91);
        assert_eq!(d2 - d1, 91);
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(d("2021-12-20").first_of_next_month(), d("2022-01-01"));
        assert_eq!(d("2024-02-29").first_of_next_month(), d("2024-03-01"));
        assert_eq!(d("2021-06-01").first_of_next_month(), d("2021-07-01"));
    }

    #[test]
    fn test_iso_key_and_display() {
        let date = d("2021-09-17");
        assert_eq!(date.iso_key(), "2021-09-17");
        assert_eq!(format!("{date}"), "2021-09-17");
    }

    #[test]
    fn test_serde() {
        let date = d("2021-12-20");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2021-12-20\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    proptest! {
        #[test]
        fn add_months_lands_in_target_month(
            year in 1990i32..2060,
            month in 1u32..=12,
            day in 1u32..=31,
            step in -120i32..=240,
        ) {
            prop_assume!(Date::from_ymd(year, month, day).is_ok());
            let date = Date::from_ymd(year, month, day).unwrap();
            let moved = date.add_months(step).unwrap();

            let expected_index = year * 12 + month as i32 - 1 + step;
            prop_assert_eq!(moved.year() * 12 + moved.month() as i32 - 1, expected_index);
            prop_assert!(moved.day() <= day);
        }
    }
}
