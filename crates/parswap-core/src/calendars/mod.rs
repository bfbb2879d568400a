//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait with the date rolling operations swap schedules need
//! - [`WeekendCalendar`] (Saturday/Sunday only) and [`HolidayCalendar`]
//!   (weekends plus an immutable holiday set)
//! - [`BusinessDayConvention`] adjustment, including Modified Following

mod conventions;
mod holiday;

pub use conventions::BusinessDayConvention;
pub use holiday::{CalendarData, HolidayCalendar};

use crate::types::Date;

/// Trait for business day calendars.
///
/// Implementors only decide which days are business days; every rolling rule
/// used by the schedule generators is a provided method built on top of that.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a weekend day or holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Shorthand for [`BusinessDayConvention::ModifiedFollowing`] adjustment.
    fn modified_following(&self, date: Date) -> Date {
        self.adjust(date, BusinessDayConvention::ModifiedFollowing)
    }

    /// Returns the last business day strictly before `date`.
    ///
    /// The input date itself is never returned, even if it is a business day.
    fn prior_business_date(&self, date: Date) -> Date {
        let mut result = date.add_days(-1);
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Returns the last business day of the month containing `date`.
    fn last_business_day_of_month(&self, date: Date) -> Date {
        self.prior_business_date(date.first_of_next_month())
    }

    /// Returns true if `date` is the last business day of its month.
    ///
    /// Schedules rolled from such a date pin every later date to month end.
    fn is_end_of_month(&self, date: Date) -> bool {
        date == self.last_business_day_of_month(date)
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}
