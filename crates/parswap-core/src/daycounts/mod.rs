//! Day count conventions.
//!
//! Every accrual and discounting fraction in parswap is Actual/365 Fixed, but
//! the convention sits behind the [`DayCount`] trait so year fractions are
//! always computed the same way.

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Calculates the year fraction between two dates. Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;
}

/// Actual/365 Fixed day count convention.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl Act365Fixed {
    /// Denominator of the year fraction.
    pub const BASIS: f64 = 365.0;
}

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / Self::BASIS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act365_fixed() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2021, 12, 20).unwrap();
        let end = Date::from_ymd(2022, 12, 20).unwrap();

        assert_eq!(dc.name(), "ACT/365F");
        assert_eq!(dc.day_count(start, end), 365);
        assert_relative_eq!(dc.year_fraction(start, end), 1.0);
    }

    #[test]
    fn test_act365_ignores_leap_day() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 365.0);
    }

    #[test]
    fn test_negative_fraction() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2022, 3, 21).unwrap();
        let end = Date::from_ymd(2021, 12, 20).unwrap();

        assert_relative_eq!(dc.year_fraction(start, end), -91.0 / 365.0);
    }
}
