//! Swap trade terms.

use std::fmt;
use std::str::FromStr;

use parswap_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{SwapError, SwapResult};

/// Which leg the holder pays.
///
/// Parsed case-insensitively from `PAY` / `REC` (`RECEIVE` is accepted too).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    /// Pay fixed, receive floating.
    Pay,
    /// Receive fixed, pay floating.
    Receive,
}

impl Direction {
    /// Short code used on trade tickets.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pay => "PAY",
            Self::Receive => "REC",
        }
    }

    /// Combines the leg present values into the holder's NPV.
    #[must_use]
    pub fn net(self, fixed_leg_pv: f64, floating_leg_pv: f64) -> f64 {
        match self {
            Self::Pay => floating_leg_pv - fixed_leg_pv,
            Self::Receive => fixed_leg_pv - floating_leg_pv,
        }
    }

    /// The other side of the trade.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Pay => Self::Receive,
            Self::Receive => Self::Pay,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PAY" => Ok(Self::Pay),
            "REC" | "RECEIVE" => Ok(Self::Receive),
            _ => Err(SwapError::invalid_direction(s)),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = SwapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.code().to_string()
    }
}

/// A fixed-for-floating interest rate swap.
///
/// Both legs pay quarterly on the same dates and share one notional. The
/// fixed rate is quoted in percent (`1.9275` means 1.9275%).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    effective_date: Date,
    termination_date: Date,
    fixed_rate: f64,
    notional: f64,
    direction: Direction,
}

impl Trade {
    /// Creates a trade after checking its terms.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTrade`] if termination is not after the
    /// effective date, the notional is not positive, or a number is not
    /// finite.
    pub fn new(
        effective_date: Date,
        termination_date: Date,
        fixed_rate: f64,
        notional: f64,
        direction: Direction,
    ) -> SwapResult<Self> {
        if termination_date <= effective_date {
            return Err(SwapError::invalid_trade(format!(
                "termination date {termination_date} must be after effective date {effective_date}"
            )));
        }
        if !fixed_rate.is_finite() {
            return Err(SwapError::invalid_trade("fixed rate must be finite"));
        }
        if !notional.is_finite() || notional <= 0.0 {
            return Err(SwapError::invalid_trade(format!(
                "notional must be positive, got {notional}"
            )));
        }

        Ok(Self {
            effective_date,
            termination_date,
            fixed_rate,
            notional,
            direction,
        })
    }

    /// Creates a trade from ISO dates and a direction code.
    ///
    /// # Errors
    ///
    /// Returns an error if a date does not parse, the direction is neither
    /// PAY nor REC, or the terms fail [`Trade::new`].
    pub fn from_iso(
        effective_date: &str,
        termination_date: &str,
        fixed_rate: f64,
        notional: f64,
        direction: &str,
    ) -> SwapResult<Self> {
        Self::new(
            Date::parse(effective_date)?,
            Date::parse(termination_date)?,
            fixed_rate,
            notional,
            direction.parse()?,
        )
    }

    /// Effective (start) date.
    #[must_use]
    pub fn effective_date(&self) -> Date {
        self.effective_date
    }

    /// Termination (maturity) date.
    #[must_use]
    pub fn termination_date(&self) -> Date {
        self.termination_date
    }

    /// Fixed rate in percent.
    #[must_use]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Notional amount.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Pay or receive fixed.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The same trade seen from the counterparty.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            direction: self.direction.opposite(),
            ..self.clone()
        }
    }
}
