//! # Parswap Curves
//!
//! Curve construction from a sparse set of par swap rates.
//!
//! Building a [`Curve`] runs five stages, each in its own module:
//!
//! 1. [`schedule`]: 81 quarterly Modified-Following dates spanning 20 years
//! 2. [`swap_curve`]: par rate on every schedule date, linear in calendar days
//!    between key tenors
//! 3. [`bootstrap`]: discount factors that price each synthetic par swap to zero
//! 4. [`zero_curve`]: continuously compounded zero rates implied by the factors
//! 5. [`curve`]: the immutable aggregate with zero-rate interpolation at any date
//!
//! [`bumping`] produces shifted copies of the input quotes for key-rate risk.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use parswap_core::calendars::WeekendCalendar;
//! use parswap_core::Date;
//! use parswap_curves::{Curve, ParRates};
//!
//! let quotes = ParRates::from_pairs([(0.0, 1.0), (0.25, 1.25), (1.0, 1.5), (20.0, 2.0)]).unwrap();
//! let settlement = Date::parse("2021-12-20").unwrap();
//!
//! let curve = Curve::build(settlement, quotes, Arc::new(WeekendCalendar)).unwrap();
//!
//! assert_eq!(curve.schedule().len(), 81);
//! assert_eq!(curve.discount_factor(curve.schedule().first()), Some(1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod bootstrap;
pub mod bumping;
pub mod curve;
pub mod error;
pub mod quotes;
pub mod schedule;
pub mod swap_curve;
pub mod zero_curve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bumping::KeyRateBump;
    pub use crate::curve::{Curve, CurvePoint};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::quotes::ParRates;
    pub use crate::schedule::PaymentSchedule;
}

pub use bumping::KeyRateBump;
pub use curve::{Curve, CurvePoint};
pub use error::{CurveError, CurveResult};
pub use quotes::ParRates;
pub use schedule::PaymentSchedule;

/// Number of decimal places every stored curve value is rounded to.
pub const CURVE_PRECISION: u32 = 12;
