//! # Parswap Swaps
//!
//! Valuation of a plain fixed-for-floating interest rate swap against a
//! [`Curve`](parswap_curves::Curve) built from CCP par rates.
//!
//! - [`Trade`]: validated trade terms and [`Direction`] (PAY / REC)
//! - [`FixingTable`]: historical floating-rate fixings for the period already
//!   running at settlement
//! - [`cashflows`]: coupon schedule generation and per-leg cash flows
//! - [`SwapPricer`]: present values, NPV and key-rate deltas
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use parswap_core::calendars::WeekendCalendar;
//! use parswap_core::Date;
//! use parswap_curves::{Curve, ParRates};
//! use parswap_swaps::{Direction, FixingTable, SwapPricer, Trade};
//!
//! let quotes = ParRates::from_pairs([(0.0, 1.0), (0.25, 1.2), (1.0, 1.5), (5.0, 1.8), (20.0, 1.6)])
//!     .unwrap();
//! let curve = Curve::build(Date::parse("2021-12-20").unwrap(), quotes, Arc::new(WeekendCalendar))
//!     .unwrap();
//!
//! let trade = Trade::from_iso("2021-06-21", "2026-06-22", 1.9, 1_000_000_000.0, "rec").unwrap();
//! assert_eq!(trade.direction(), Direction::Receive);
//!
//! // The running period started 2021-09-21 and fixed on the prior business day.
//! let fixings = FixingTable::from_iso_pairs([("2021-09-20", 1.0)]).unwrap();
//!
//! let pricer = SwapPricer::new(&trade, &curve, &fixings);
//! let result = pricer.valuation().unwrap();
//! assert_eq!(result.npv, result.fixed_leg_pv - result.floating_leg_pv);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod cashflows;
pub mod error;
pub mod fixings;
pub mod pricing;
pub mod risk;
pub mod trade;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{CashFlow, LegCashFlows, LegType};
    pub use crate::error::{SwapError, SwapResult};
    pub use crate::fixings::FixingTable;
    pub use crate::pricing::{SwapPricer, ValuationResult};
    pub use crate::risk::{DeltaLadder, KeyRateDelta};
    pub use crate::trade::{Direction, Trade};
}

pub use cashflows::{CashFlow, LegCashFlows, LegType};
pub use error::{SwapError, SwapResult};
pub use fixings::FixingTable;
pub use pricing::{SwapPricer, ValuationResult};
pub use risk::{DeltaLadder, KeyRateDelta};
pub use trade::{Direction, Trade};
