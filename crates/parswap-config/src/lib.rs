//! # Parswap Config
//!
//! Loads a swap valuation job (trade terms, CCP par rates, floating-rate
//! fixings and the holiday calendar) from a TOML or JSON file.
//!
//! Side files (`fixings.file`, `calendar.file`) are resolved relative to the
//! directory of the configuration file.
//!
//! ## Example
//!
//! ```rust
//! use parswap_config::{Validate, ValuationConfig};
//!
//! let config = ValuationConfig::from_toml_str(r#"
//!     [trade]
//!     settlement_date = "2021-12-20"
//!     effective_date = "2016-12-19"
//!     termination_date = "2026-12-21"
//!     fixed_rate = 1.9275
//!     notional = 15000000000.0
//!     direction = "PAY"
//!
//!     [curve.par_rates]
//!     "0" = 0.988
//!     "1" = 1.551
//!     "5" = 1.805
//!
//!     [fixings.rates]
//!     "2021-12-17" = 1.29
//! "#).unwrap();
//!
//! assert!(config.is_valid());
//! let inputs = config.load().unwrap();
//! assert_eq!(inputs.curve.par_rates().len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod valuation;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use valuation::{
    CalendarConfig, CurveConfig, FixingsConfig, TradeConfig, ValuationConfig, ValuationInputs,
};
