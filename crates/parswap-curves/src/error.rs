//! Error types for curve operations.

use parswap_core::CoreError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Tenor key is negative, non-finite, or off the quarterly grid.
    #[error("Invalid tenor {tenor}: {reason}")]
    InvalidTenor {
        /// The offending tenor in years.
        tenor: f64,
        /// Why it was rejected.
        reason: String,
    },

    /// Tenor is not one of the quoted key tenors.
    #[error("Tenor {tenor} is not a key tenor of the par rate quotes")]
    UnknownKeyTenor {
        /// The requested tenor in years.
        tenor: f64,
    },

    /// No par rate quotes at all.
    #[error("Par rate quotes are empty")]
    EmptyQuotes,

    /// None of the quoted tenors falls on the payment schedule.
    #[error("No quoted tenor falls on the {points}-point payment schedule")]
    NoKeyTenorOnSchedule {
        /// Number of schedule points.
        points: usize,
    },

    /// Payment schedule is not strictly increasing.
    #[error("Payment schedule not strictly increasing at index {index}")]
    NonMonotonicSchedule {
        /// Index where the violation occurred.
        index: usize,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Date arithmetic failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(tenor: f64, reason: impl Into<String>) -> Self {
        Self::InvalidTenor {
            tenor,
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}
