//! Error types for swap valuation.

use parswap_core::{CoreError, Date};
use parswap_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for swap valuation.
pub type SwapResult<T> = Result<T, SwapError>;

/// Errors raised while constructing or valuing a swap.
///
/// A valuation that hits any of these returns no NPV at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// Direction is neither PAY nor REC.
    #[error("Invalid direction '{value}': expected PAY or REC")]
    InvalidDirection {
        /// The rejected input.
        value: String,
    },

    /// No fixing for the running period.
    #[error("No floating-rate fixing for {date}")]
    MissingFixing {
        /// Fixing date looked up.
        date: Date,
    },

    /// Trade terms are inconsistent.
    #[error("Invalid trade: {reason}")]
    InvalidTrade {
        /// Description of what's wrong.
        reason: String,
    },

    /// Curve construction or query failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Date or calendar failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SwapError {
    /// Creates an invalid direction error.
    #[must_use]
    pub fn invalid_direction(value: impl Into<String>) -> Self {
        Self::InvalidDirection {
            value: value.into(),
        }
    }

    /// Creates a missing fixing error.
    #[must_use]
    pub fn missing_fixing(date: Date) -> Self {
        Self::MissingFixing { date }
    }

    /// Creates an invalid trade error.
    #[must_use]
    pub fn invalid_trade(reason: impl Into<String>) -> Self {
        Self::InvalidTrade {
            reason: reason.into(),
        }
    }
}
