//! Quarterly payment schedule of the synthetic par swaps.

use parswap_core::calendars::Calendar;
use parswap_core::Date;

use crate::error::{CurveError, CurveResult};
use crate::quotes::quarters_to_tenor;

/// Months between consecutive schedule dates.
pub const PAYMENT_INTERVAL_MONTHS: i32 = 3;

/// Number of schedule points: the anchor plus 80 quarters (20 years).
pub const SCHEDULE_POINTS: usize = 81;

/// Strictly increasing quarterly dates starting at the adjusted settlement date.
///
/// Point `i` is `settlement + 3i months`, Modified-Following adjusted, and sits
/// at tenor `i * 0.25` years regardless of the adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSchedule {
    dates: Vec<Date>,
}

impl PaymentSchedule {
    /// Generates the 81-point schedule from `settlement`.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows or the adjusted dates are
    /// not strictly increasing.
    pub fn build<C: Calendar + ?Sized>(settlement: Date, calendar: &C) -> CurveResult<Self> {
        let dates = (0..SCHEDULE_POINTS)
            .map(|i| {
                let months = PAYMENT_INTERVAL_MONTHS * i as i32;
                Ok(calendar.modified_following(settlement.add_months(months)?))
            })
            .collect::<CurveResult<Vec<_>>>()?;

        Self::from_dates(dates)
    }

    /// Wraps pre-computed dates, checking they are strictly increasing.
    pub fn from_dates(dates: Vec<Date>) -> CurveResult<Self> {
        if dates.len() < 2 {
            return Err(CurveError::invalid_value(format!(
                "schedule needs at least 2 dates, got {}",
                dates.len()
            )));
        }
        if let Some(index) = dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(CurveError::NonMonotonicSchedule { index: index + 1 });
        }
        Ok(Self { dates })
    }

    /// All schedule dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of schedule dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false; a schedule has at least two dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The anchor date (discount factor 1).
    #[must_use]
    pub fn first(&self) -> Date {
        self.dates[0]
    }

    /// The last schedule date.
    #[must_use]
    pub fn last(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Date at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Date> {
        self.dates.get(index).copied()
    }

    /// Tenor in years of the point at `index` (`index * 0.25`).
    #[must_use]
    pub fn tenor_at(&self, index: usize) -> f64 {
        quarters_to_tenor(index as u32)
    }

    /// Index of `date` if it is a schedule point.
    #[must_use]
    pub fn index_of(&self, date: Date) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    /// Tenor in years of `date` if it is a schedule point.
    #[must_use]
    pub fn tenor_of(&self, date: Date) -> Option<f64> {
        self.index_of(date).map(|i| self.tenor_at(i))
    }

    /// Locates `date` relative to the schedule.
    #[must_use]
    pub fn locate(&self, date: Date) -> Location {
        match self.dates.binary_search(&date) {
            Ok(index) => Location::Exact(index),
            Err(0) => Location::Before,
            Err(pos) if pos == self.dates.len() => Location::After,
            Err(pos) => Location::Between(pos - 1, pos),
        }
    }
}

/// Position of a date relative to a sorted date sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The date is the point at this index.
    Exact(usize),
    /// Strictly between the points at these two consecutive indices.
    Between(usize, usize),
    /// Before the first point.
    Before,
    /// After the last point.
    After,
}

#[cfg(test)]
mod tests {
    use super::*;
    use parswap_core::calendars::{HolidayCalendar, WeekendCalendar};

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_schedule_shape() {
        let schedule = PaymentSchedule::build(d("2021-12-20"), &WeekendCalendar).unwrap();

        assert_eq!(schedule.len(), SCHEDULE_POINTS);
        assert_eq!(schedule.first(), d("2021-12-20"));
        // 2041-12-20 is a Friday.
        assert_eq!(schedule.last(), d("2041-12-20"));
        // 2022-03-20 is a Sunday.
        assert_eq!(schedule.get(1), Some(d("2022-03-21")));
        assert!(schedule.dates().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_anchor_is_adjusted_settlement() {
        // 2022-03-19 is a Saturday.
        let schedule = PaymentSchedule::build(d("2022-03-19"), &WeekendCalendar).unwrap();
        assert_eq!(schedule.first(), d("2022-03-21"));
    }

    #[test]
    fn test_schedule_respects_holidays() {
        let cal = HolidayCalendar::from_iso_strings("Test", ["2022-03-21"]).unwrap();
        let schedule = PaymentSchedule::build(d("2021-12-20"), &cal).unwrap();
        assert_eq!(schedule.get(1), Some(d("2022-03-22")));
    }

    #[test]
    fn test_tenors() {
        let schedule = PaymentSchedule::build(d("2021-12-20"), &WeekendCalendar).unwrap();

        assert_eq!(schedule.tenor_at(0), 0.0);
        assert_eq!(schedule.tenor_at(6), 1.5);
        assert_eq!(schedule.tenor_at(80), 20.0);
        assert_eq!(schedule.tenor_of(d("2022-03-21")), Some(0.25));
        assert_eq!(schedule.tenor_of(d("2022-03-20")), None);
    }

    #[test]
    fn test_locate() {
        let schedule = PaymentSchedule::build(d("2021-12-20"), &WeekendCalendar).unwrap();

        assert_eq!(schedule.locate(d("2021-12-20")), Location::Exact(0));
        assert_eq!(schedule.locate(d("2022-01-15")), Location::Between(0, 1));
        assert_eq!(schedule.locate(d("2021-12-01")), Location::Before);
        assert_eq!(schedule.locate(d("2045-01-01")), Location::After);
    }

    #[test]
    fn test_from_dates_rejects_unsorted() {
        let err = PaymentSchedule::from_dates(vec![d("2022-01-01"), d("2021-01-01")]).unwrap_err();
        assert_eq!(err, CurveError::NonMonotonicSchedule { index: 1 });
    }
}
