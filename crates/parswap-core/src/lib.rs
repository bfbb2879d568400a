//! # Parswap Core
//!
//! Date arithmetic and business-day calendars for the parswap interest-rate
//! swap valuation library.
//!
//! This crate provides the foundational building blocks used throughout parswap:
//!
//! - **Types**: [`Date`] newtype with month stepping that never spills into the
//!   following month
//! - **Business Day Calendars**: the [`Calendar`](calendars::Calendar) trait,
//!   weekend-only and holiday-list calendars, Modified Following adjustment and
//!   end-of-month roll detection
//! - **Day Count**: Actual/365 Fixed year fractions
//!
//! ## Example
//!
//! ```rust
//! use parswap_core::prelude::*;
//!
//! let cal = HolidayCalendar::from_iso_strings("KRX", ["2021-09-20", "2021-09-21", "2021-09-22"])
//!     .unwrap();
//!
//! // Sunday 2021-09-19 rolls past the Chuseok holidays.
//! let date = Date::parse("2021-09-19").unwrap();
//! let adjusted = cal.adjust(date, BusinessDayConvention::ModifiedFollowing);
//! assert_eq!(adjusted, Date::parse("2021-09-23").unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod math;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, CalendarData, HolidayCalendar, WeekendCalendar,
    };
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::math::round_to;
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Date;
