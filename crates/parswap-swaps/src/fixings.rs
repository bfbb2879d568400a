//! Historical floating-rate fixings.

use std::collections::BTreeMap;

use parswap_core::calendars::Calendar;
use parswap_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{SwapError, SwapResult};

/// Published floating-rate index values (CD 91-day) by fixing date.
///
/// Rates are in percent. Serialized as a JSON/TOML map keyed by ISO date;
/// keys longer than ten characters (timestamps) are cut to the date part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct FixingTable {
    rates: BTreeMap<Date, f64>,
}

impl FixingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from `(date, rate_percent)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a rate is not finite.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Date, f64)>) -> SwapResult<Self> {
        let mut table = Self::new();
        for (date, rate) in pairs {
            table.insert(date, rate)?;
        }
        Ok(table)
    }

    /// Creates a table from `(iso_date, rate_percent)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a date does not parse or a rate is not finite.
    pub fn from_iso_pairs<S: AsRef<str>>(
        pairs: impl IntoIterator<Item = (S, f64)>,
    ) -> SwapResult<Self> {
        let mut table = Self::new();
        for (key, rate) in pairs {
            table.insert(parse_key(key.as_ref())?, rate)?;
        }
        Ok(table)
    }

    /// Records a fixing, replacing any previous value for the date.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is not finite.
    pub fn insert(&mut self, date: Date, rate_percent: f64) -> SwapResult<()> {
        if !rate_percent.is_finite() {
            return Err(SwapError::invalid_trade(format!(
                "fixing on {date} is not a finite rate"
            )));
        }
        self.rates.insert(date, rate_percent);
        Ok(())
    }

    /// Fixing on an exact date, if published.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<f64> {
        self.rates.get(&date).copied()
    }

    /// Fixing on an exact date.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::MissingFixing`] when the date has no entry.
    pub fn rate_on(&self, date: Date) -> SwapResult<f64> {
        self.get(date).ok_or_else(|| SwapError::missing_fixing(date))
    }

    /// Fixing for a period starting on `accrual_start`.
    ///
    /// The index is observed on the business day before the period starts.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::MissingFixing`] for the observation date.
    pub fn fixing_for_period<C: Calendar + ?Sized>(
        &self,
        accrual_start: Date,
        calendar: &C,
    ) -> SwapResult<f64> {
        self.rate_on(calendar.prior_business_date(accrual_start))
    }

    /// Number of fixings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if no fixings are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over `(date, rate_percent)` in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.rates.iter().map(|(date, rate)| (*date, *rate))
    }
}

fn parse_key(key: &str) -> SwapResult<Date> {
    let key = key.trim();
    let date_part = key.get(..10).unwrap_or(key);
    Ok(Date::parse(date_part)?)
}

impl TryFrom<BTreeMap<String, f64>> for FixingTable {
    type Error = SwapError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_iso_pairs(map)
    }
}

impl From<FixingTable> for BTreeMap<String, f64> {
    fn from(table: FixingTable) -> Self {
        table
            .rates
            .into_iter()
            .map(|(date, rate)| (date.iso_key(), rate))
            .collect()
    }
}
