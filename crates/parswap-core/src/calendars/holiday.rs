//! Holiday-list calendar.
//!
//! A [`HolidayCalendar`] treats Saturdays, Sundays and an immutable set of
//! holiday dates as non-business days. The set is loaded once (from dates, ISO
//! strings or a JSON document) and never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use parswap_core::calendars::{Calendar, HolidayCalendar};
//! use parswap_core::types::Date;
//!
//! let cal = HolidayCalendar::from_json(
//!     r#"{ "name": "KRX", "holidays": ["2021-12-31", "2022-01-31"] }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(cal.name(), "KRX");
//! assert!(!cal.is_business_day(Date::from_ymd(2021, 12, 31).unwrap()));
//! assert!(cal.is_business_day(Date::from_ymd(2021, 12, 30).unwrap()));
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Serializable calendar description.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "KRX",
///   "holidays": ["2021-09-20", "2021-09-21", "2021-09-22"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarData {
    /// Name of the calendar.
    #[serde(default)]
    pub name: String,
    /// Holiday dates as `YYYY-MM-DD` strings.
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Weekend plus fixed holiday list calendar.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl HolidayCalendar {
    /// Create a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Create a calendar from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CalendarError` naming the first string that does not parse.
    pub fn from_iso_strings<I, S>(name: impl Into<String>, holidays: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let holidays = holidays
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Date::parse(s)
                    .map_err(|e| CoreError::calendar_error(format!("Invalid date '{s}': {e}")))
            })
            .collect::<CoreResult<HashSet<_>>>()?;

        Ok(Self {
            name: name.into(),
            holidays,
        })
    }

    /// Load a calendar from CalendarData.
    pub fn from_calendar_data(data: CalendarData) -> CoreResult<Self> {
        Self::from_iso_strings(data.name, data.holidays)
    }

    /// Load a calendar from JSON data.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let data: CalendarData = serde_json::from_str(json)
            .map_err(|e| CoreError::calendar_error(format!("Failed to parse JSON: {e}")))?;
        Self::from_calendar_data(data)
    }

    /// Load a calendar from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::calendar_error(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Number of holiday dates (weekends not included).
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if `date` is in the holiday set.
    pub fn is_listed_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Exports the calendar back to its serializable form, holidays sorted.
    pub fn to_calendar_data(&self) -> CalendarData {
        let mut dates: Vec<Date> = self.holidays.iter().copied().collect();
        dates.sort_unstable();
        CalendarData {
            name: self.name.clone(),
            holidays: dates.iter().map(Date::iso_key).collect(),
        }
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }
}
