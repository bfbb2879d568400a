//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    #[default]
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
        };
        write!(f, "{name}")
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar);
            if adjusted.same_month(&date) {
                adjusted
            } else {
                // Crossed month boundary, go preceding instead
                preceding(date, calendar)
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),
    }
}

/// Returns the next business day on or after the given date.
fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

/// Returns the previous business day on or before the given date.
fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{HolidayCalendar, WeekendCalendar};
    use proptest::prelude::*;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_following() {
        let cal = WeekendCalendar;

        // Saturday should roll to Monday
        let adjusted = adjust(d("2025-01-04"), BusinessDayConvention::Following, &cal);
        assert_eq!(adjusted, d("2025-01-06"));
    }

    #[test]
    fn test_preceding() {
        let cal = WeekendCalendar;

        let adjusted = adjust(d("2025-01-04"), BusinessDayConvention::Preceding, &cal);
        assert_eq!(adjusted, d("2025-01-03"));
    }

    #[test]
    fn test_modified_following_same_month() {
        let cal = WeekendCalendar;

        // Sunday Jan 5 should roll to Monday Jan 6 (same month)
        let adjusted = adjust(d("2025-01-05"), BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, d("2025-01-06"));
    }

    #[test]
    fn test_modified_following_crosses_month() {
        let cal = WeekendCalendar;

        // Saturday May 31 2025: following would be June 2, so roll back to May 30.
        let adjusted = adjust(d("2025-05-31"), BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, d("2025-05-30"));
    }

    #[test]
    fn test_modified_following_crosses_year() {
        let cal = HolidayCalendar::from_iso_strings("Year End", ["2022-12-30"]).unwrap();

        // Saturday Dec 31 2022 with Friday Dec 30 a holiday: roll back to Thursday.
        let adjusted = adjust(d("2022-12-31"), BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, d("2022-12-29"));
    }

    #[test]
    fn test_modified_following_skips_holidays() {
        let cal =
            HolidayCalendar::from_iso_strings("Chuseok", ["2021-09-20", "2021-09-21", "2021-09-22"])
                .unwrap();

        let adjusted = adjust(d("2021-09-19"), BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, d("2021-09-23"));
    }

    #[test]
    fn test_unadjusted() {
        let cal = WeekendCalendar;

        let saturday = d("2025-01-04");
        assert_eq!(adjust(saturday, BusinessDayConvention::Unadjusted, &cal), saturday);
    }

    #[test]
    fn test_business_day_unchanged() {
        let cal = WeekendCalendar;

        let monday = d("2025-01-06");
        assert_eq!(adjust(monday, BusinessDayConvention::ModifiedFollowing, &cal), monday);
    }

    proptest! {
        #[test]
        fn modified_following_is_idempotent(offset in 0i64..20_000) {
            let cal = HolidayCalendar::from_iso_strings(
                "Sample",
                ["2021-09-20", "2021-09-21", "2021-09-22", "2021-12-31", "2022-01-31"],
            )
            .unwrap();
            let date = d("2000-01-01").add_days(offset);

            let once = cal.modified_following(date);
            let twice = cal.modified_following(once);
            prop_assert_eq!(once, twice);
            prop_assert!(cal.is_business_day(once));
            prop_assert!(once.same_month(&date));
        }
    }
}
