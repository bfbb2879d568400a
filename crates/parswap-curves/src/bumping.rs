//! Key-rate bumps of the input quotes.
//!
//! A key-rate bump shifts exactly one quoted tenor. Because the swap curve
//! interpolates between quotes, and every discount factor depends on all
//! earlier ones, the bumped quotes must go through a full rebuild rather
//! than a local patch of the built curve.

use crate::error::CurveResult;
use crate::quotes::ParRates;

/// Basis points per percentage point.
pub const BPS_PER_PERCENT: f64 = 100.0;

/// Shift of a single quoted tenor.
///
/// # Example
///
/// ```rust
/// use parswap_curves::{KeyRateBump, ParRates};
///
/// let quotes = ParRates::from_pairs([(1.0, 1.50), (5.0, 1.80)]).unwrap();
/// let bumped = KeyRateBump::new(5.0, 1.0).apply(&quotes).unwrap();
///
/// assert!((bumped.get(5.0).unwrap() - 1.81).abs() < 1e-12);
/// assert_eq!(bumped.get(1.0), Some(1.50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyRateBump {
    /// The quoted tenor (in years) to shift.
    key_tenor: f64,
    /// Shift amount in basis points.
    shift_bps: f64,
}

impl KeyRateBump {
    /// Creates a bump of `shift_bps` basis points at `key_tenor`.
    #[must_use]
    pub fn new(key_tenor: f64, shift_bps: f64) -> Self {
        Self {
            key_tenor,
            shift_bps,
        }
    }

    /// Down and up bumps of `shift_bps` for a centered difference.
    #[must_use]
    pub fn central_pair(key_tenor: f64, shift_bps: f64) -> (Self, Self) {
        (
            Self::new(key_tenor, -shift_bps),
            Self::new(key_tenor, shift_bps),
        )
    }

    /// One bump per quoted tenor.
    #[must_use]
    pub fn profile(quotes: &ParRates, shift_bps: f64) -> Vec<Self> {
        quotes
            .key_tenors()
            .into_iter()
            .map(|tenor| Self::new(tenor, shift_bps))
            .collect()
    }

    /// Returns the key tenor.
    #[must_use]
    pub fn key_tenor(&self) -> f64 {
        self.key_tenor
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the shift in the quotes' percent units.
    #[must_use]
    pub fn shift_percent(&self) -> f64 {
        self.shift_bps / BPS_PER_PERCENT
    }

    /// Produces a bumped copy of `quotes`; the input is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::UnknownKeyTenor` if the tenor is not quoted.
    pub fn apply(&self, quotes: &ParRates) -> CurveResult<ParRates> {
        quotes.bumped(self.key_tenor, self.shift_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use approx::assert_relative_eq;

    fn quotes() -> ParRates {
        ParRates::from_pairs([(0.25, 1.27), (1.0, 1.55), (5.0, 1.805)]).unwrap()
    }

    #[test]
    fn test_central_pair() {
        let (down, up) = KeyRateBump::central_pair(5.0, 1.0);
        let q = quotes();

        assert_relative_eq!(down.apply(&q).unwrap().get(5.0).unwrap(), 1.795);
        assert_relative_eq!(up.apply(&q).unwrap().get(5.0).unwrap(), 1.815);
        assert_eq!(q.get(5.0), Some(1.805));
    }

    #[test]
    fn test_profile_covers_every_quote() {
        let profile = KeyRateBump::profile(&quotes(), 1.0);
        let tenors: Vec<f64> = profile.iter().map(KeyRateBump::key_tenor).collect();
        assert_eq!(tenors, vec![0.25, 1.0, 5.0]);
        assert!(profile.iter().all(|b| b.shift_percent() == 0.01));
    }

    #[test]
    fn test_unknown_tenor() {
        let err = KeyRateBump::new(7.0, 1.0).apply(&quotes()).unwrap_err();
        assert_eq!(err, CurveError::UnknownKeyTenor { tenor: 7.0 });
    }
}
