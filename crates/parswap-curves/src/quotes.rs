//! Par swap rate quotes.
//!
//! [`ParRates`] maps a tenor in years to a par rate in percent. Tenors live on
//! the quarterly grid (0, 0.25, 0.5, ...) and are stored as a whole number of
//! quarters so lookups against schedule points are exact.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Quarters per year on the tenor grid.
pub const QUARTERS_PER_YEAR: f64 = 4.0;

const GRID_TOLERANCE: f64 = 1e-9;

/// Immutable-by-convention set of par rate quotes (tenor in years -> percent).
///
/// Every valuation takes its own snapshot; bumped copies are produced with
/// [`ParRates::bumped`] instead of mutating a shared map.
///
/// Serializes as a map from tenor string to percent:
///
/// ```rust
/// use parswap_curves::ParRates;
///
/// let quotes: ParRates = serde_json::from_str(r#"{ "0": 0.988, "0.25": 1.27, "1.5": 1.67 }"#).unwrap();
/// assert_eq!(quotes.get(1.5), Some(1.67));
/// assert_eq!(quotes.key_tenors(), vec![0.0, 0.25, 1.5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ParRates {
    /// Quarter index -> rate in percent.
    quotes: BTreeMap<u32, f64>,
}

impl ParRates {
    /// Creates an empty quote set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds quotes from `(tenor_years, rate_percent)` pairs.
    ///
    /// Later duplicates of the same tenor replace earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> CurveResult<Self> {
        let mut rates = Self::new();
        for (tenor, rate) in pairs {
            rates.insert(tenor, rate)?;
        }
        Ok(rates)
    }

    /// Inserts or replaces the quote at `tenor`.
    pub fn insert(&mut self, tenor: f64, rate_percent: f64) -> CurveResult<()> {
        if !rate_percent.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "rate at tenor {tenor} is not finite"
            )));
        }
        let quarters = tenor_to_quarters(tenor)?;
        self.quotes.insert(quarters, rate_percent);
        Ok(())
    }

    /// Rate in percent at an exact key tenor.
    #[must_use]
    pub fn get(&self, tenor: f64) -> Option<f64> {
        tenor_to_quarters(tenor)
            .ok()
            .and_then(|q| self.quotes.get(&q).copied())
    }

    /// Rate in percent at a quarter index of the tenor grid.
    #[must_use]
    pub fn rate_at_quarter(&self, quarters: u32) -> Option<f64> {
        self.quotes.get(&quarters).copied()
    }

    /// Returns true if `tenor` is a quoted key tenor.
    #[must_use]
    pub fn contains(&self, tenor: f64) -> bool {
        self.get(tenor).is_some()
    }

    /// Quoted tenors in ascending order.
    #[must_use]
    pub fn key_tenors(&self) -> Vec<f64> {
        self.quotes.keys().map(|&q| quarters_to_tenor(q)).collect()
    }

    /// Iterates `(tenor_years, rate_percent)` in ascending tenor order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.quotes
            .iter()
            .map(|(&q, &rate)| (quarters_to_tenor(q), rate))
    }

    /// Number of quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if there are no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Returns a copy with the quote at `tenor` shifted by `shift_percent`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::UnknownKeyTenor` if `tenor` is not quoted.
    pub fn bumped(&self, tenor: f64, shift_percent: f64) -> CurveResult<Self> {
        let quarters = tenor_to_quarters(tenor)?;
        let mut bumped = self.clone();
        match bumped.quotes.get_mut(&quarters) {
            Some(rate) => *rate += shift_percent,
            None => return Err(CurveError::UnknownKeyTenor { tenor }),
        }
        Ok(bumped)
    }
}

impl TryFrom<BTreeMap<String, f64>> for ParRates {
    type Error = CurveError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let pairs = map
            .into_iter()
            .map(|(key, rate)| {
                key.trim()
                    .parse::<f64>()
                    .map(|tenor| (tenor, rate))
                    .map_err(|_| CurveError::invalid_value(format!("tenor key '{key}' is not a number")))
            })
            .collect::<CurveResult<Vec<_>>>()?;
        Self::from_pairs(pairs)
    }
}

impl From<ParRates> for BTreeMap<String, f64> {
    fn from(rates: ParRates) -> Self {
        rates
            .iter()
            .map(|(tenor, rate)| (tenor.to_string(), rate))
            .collect()
    }
}

/// Converts a tenor in years to a whole number of quarters.
pub fn tenor_to_quarters(tenor: f64) -> CurveResult<u32> {
    if !tenor.is_finite() || tenor < 0.0 {
        return Err(CurveError::invalid_tenor(tenor, "must be a non-negative number"));
    }
    let scaled = tenor * QUARTERS_PER_YEAR;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > GRID_TOLERANCE {
        return Err(CurveError::invalid_tenor(tenor, "not a multiple of 0.25 years"));
    }
    if rounded > f64::from(u32::MAX) {
        return Err(CurveError::invalid_tenor(tenor, "too many quarters"));
    }
    Ok(rounded as u32)
}

/// Converts a quarter count back to a tenor in years.
#[must_use]
pub fn quarters_to_tenor(quarters: u32) -> f64 {
    f64::from(quarters) / QUARTERS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_pairs_orders_tenors() {
        let rates = ParRates::from_pairs([(5.0, 1.805), (0.0, 0.988), (1.5, 1.674)]).unwrap();
        assert_eq!(rates.key_tenors(), vec![0.0, 1.5, 5.0]);
        assert_eq!(rates.len(), 3);
        assert_eq!(rates.get(5.0), Some(1.805));
        assert_eq!(rates.rate_at_quarter(6), Some(1.674));
        assert!(rates.get(2.0).is_none());
    }

    #[test]
    fn test_off_grid_tenor_rejected() {
        let err = ParRates::from_pairs([(0.3, 1.0)]).unwrap_err();
        assert!(matches!(err, CurveError::InvalidTenor { .. }));

        assert!(ParRates::from_pairs([(-1.0, 1.0)]).is_err());
        assert!(ParRates::from_pairs([(f64::NAN, 1.0)]).is_err());
        assert!(ParRates::from_pairs([(1.0, f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_huge_tenor_rejected() {
        let max_years = f64::from(u32::MAX) / QUARTERS_PER_YEAR;
        assert_eq!(tenor_to_quarters(max_years).unwrap(), u32::MAX);

        let err = tenor_to_quarters(max_years + 0.25).unwrap_err();
        assert!(matches!(err, CurveError::InvalidTenor { .. }));
        assert!(tenor_to_quarters(1e12).is_err());
    }

    #[test]
    fn test_bumped_is_a_new_snapshot() {
        let base = ParRates::from_pairs([(1.0, 1.5), (5.0, 1.8)]).unwrap();
        let up = base.bumped(5.0, 0.01).unwrap();

        assert_eq!(base.get(5.0), Some(1.8));
        assert_relative_eq!(up.get(5.0).unwrap(), 1.81);
        assert_eq!(up.get(1.0), Some(1.5));
    }

    #[test]
    fn test_bump_unknown_tenor() {
        let base = ParRates::from_pairs([(1.0, 1.5)]).unwrap();
        let err = base.bumped(2.0, 0.01).unwrap_err();
        assert_eq!(err, CurveError::UnknownKeyTenor { tenor: 2.0 });
    }

    #[test]
    fn test_serde_map_form() {
        let rates = ParRates::from_pairs([(0.25, 1.27), (10.0, 1.7875)]).unwrap();
        let json = serde_json::to_string(&rates).unwrap();
        let back: ParRates = serde_json::from_str(&json).unwrap();
        assert_eq!(rates, back);

        let bad: Result<ParRates, _> = serde_json::from_str(r#"{ "1y": 1.0 }"#);
        assert!(bad.is_err());
    }
}
