//! Key-rate sensitivities.
//!
//! Each bump builds a fresh [`Curve`] from its own copy of the quotes, so the
//! base curve is never touched and tenors can be bumped in parallel.

use parswap_curves::{Curve, KeyRateBump};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::SwapResult;
use crate::fixings::FixingTable;
use crate::pricing::SwapPricer;
use crate::trade::Trade;

/// Bump size for key-rate deltas, in basis points.
pub const DELTA_SHIFT_BPS: f64 = 1.0;

/// Delta at one quoted tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyRateDelta {
    /// Quoted tenor in years.
    pub tenor: f64,
    /// NPV change per basis point (currency units).
    pub delta: f64,
}

/// Deltas at every quoted tenor, in tenor order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeltaLadder {
    /// Per-tenor deltas.
    pub deltas: Vec<KeyRateDelta>,
}

impl DeltaLadder {
    /// Sum of all key-rate deltas.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.deltas.iter().map(|kr| kr.delta).sum()
    }

    /// Delta at a quoted tenor.
    #[must_use]
    pub fn get(&self, tenor: f64) -> Option<f64> {
        self.deltas
            .iter()
            .find(|kr| (kr.tenor - tenor).abs() < 1e-9)
            .map(|kr| kr.delta)
    }

    /// Number of tenors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// True if no tenors were bumped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Iterates the per-tenor deltas.
    pub fn iter(&self) -> impl Iterator<Item = &KeyRateDelta> {
        self.deltas.iter()
    }
}

fn npv_with_bump(
    trade: &Trade,
    curve: &Curve,
    fixings: &FixingTable,
    bump: KeyRateBump,
) -> SwapResult<f64> {
    let bumped = curve.with_par_rates(bump.apply(curve.par_rates())?)?;
    SwapPricer::new(trade, &bumped, fixings).npv()
}

/// Centered key-rate delta: `(NPV(-1bp) - NPV(+1bp)) / 2`.
///
/// The settlement date, calendar and quote snapshot come from `curve`; each
/// side of the bump rebuilds the whole curve.
///
/// # Errors
///
/// Returns [`CurveError::UnknownKeyTenor`](parswap_curves::CurveError::UnknownKeyTenor)
/// if `tenor` is not quoted, or any valuation error.
pub fn key_rate_delta(
    trade: &Trade,
    curve: &Curve,
    fixings: &FixingTable,
    tenor: f64,
) -> SwapResult<f64> {
    let (down, up) = KeyRateBump::central_pair(tenor, DELTA_SHIFT_BPS);
    let npv_down = npv_with_bump(trade, curve, fixings, down)?;
    let npv_up = npv_with_bump(trade, curve, fixings, up)?;
    let delta = (npv_down - npv_up) / 2.0;
    debug!(tenor, npv_down, npv_up, delta, "key rate delta");
    Ok(delta)
}

/// Key-rate deltas at every quoted tenor, computed in parallel.
///
/// # Errors
///
/// Returns the first valuation error encountered.
pub fn delta_ladder(
    trade: &Trade,
    curve: &Curve,
    fixings: &FixingTable,
) -> SwapResult<DeltaLadder> {
    let deltas = curve
        .par_rates()
        .key_tenors()
        .into_par_iter()
        .map(|tenor| {
            key_rate_delta(trade, curve, fixings, tenor).map(|delta| KeyRateDelta { tenor, delta })
        })
        .collect::<SwapResult<Vec<_>>>()?;

    Ok(DeltaLadder { deltas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwapError;
    use parswap_core::calendars::WeekendCalendar;
    use parswap_core::Date;
    use parswap_curves::{CurveError, ParRates};
    use std::sync::Arc;

    fn curve() -> Curve {
        let quotes = ParRates::from_pairs([
            (0.0, 0.988),
            (0.25, 1.27),
            (1.0, 1.551),
            (5.0, 1.805),
            (10.0, 1.793),
            (20.0, 1.5525),
        ])
        .unwrap();
        Curve::build(
            Date::parse("2021-12-20").unwrap(),
            quotes,
            Arc::new(WeekendCalendar),
        )
        .unwrap()
    }

    fn fixings() -> FixingTable {
        FixingTable::from_iso_pairs([("2021-12-17", 1.29)]).unwrap()
    }

    #[test]
    fn test_delta_signs_by_direction() {
        let curve = curve();
        let fixings = fixings();
        let pay = Trade::from_iso("2016-12-19", "2026-12-21", 1.9275, 1e10, "PAY").unwrap();
        let rec = pay.reversed();

        let pay_delta = key_rate_delta(&pay, &curve, &fixings, 5.0).unwrap();
        let rec_delta = key_rate_delta(&rec, &curve, &fixings, 5.0).unwrap();

        // Payer gains when rates rise, so NPV(-1bp) < NPV(+1bp).
        assert!(pay_delta < 0.0);
        assert!(rec_delta > 0.0);
        assert!((pay_delta + rec_delta).abs() < 1e-6 * pay_delta.abs());
    }

    #[test]
    fn test_delta_leaves_base_curve_untouched() {
        let curve = curve();
        let before = curve.par_rates().clone();
        let trade = Trade::from_iso("2016-12-19", "2026-12-21", 1.9275, 1e10, "PAY").unwrap();
        key_rate_delta(&trade, &curve, &fixings(), 5.0).unwrap();
        assert_eq!(curve.par_rates(), &before);
    }

    #[test]
    fn test_unknown_tenor() {
        let curve = curve();
        let trade = Trade::from_iso("2016-12-19", "2026-12-21", 1.9275, 1e10, "PAY").unwrap();
        let err = key_rate_delta(&trade, &curve, &fixings(), 7.0).unwrap_err();
        assert_eq!(err, SwapError::Curve(CurveError::UnknownKeyTenor { tenor: 7.0 }));
    }

    #[test]
    fn test_ladder_matches_single_deltas() {
        let curve = curve();
        let fixings = fixings();
        let trade = Trade::from_iso("2016-12-19", "2026-12-21", 1.9275, 1e10, "PAY").unwrap();

        let ladder = delta_ladder(&trade, &curve, &fixings).unwrap();
        assert_eq!(ladder.len(), 6);

        let tenors: Vec<f64> = ladder.iter().map(|kr| kr.tenor).collect();
        assert_eq!(tenors, vec![0.0, 0.25, 1.0, 5.0, 10.0, 20.0]);

        let single = key_rate_delta(&trade, &curve, &fixings, 5.0).unwrap();
        assert_eq!(ladder.get(5.0), Some(single));
        assert_eq!(
            ladder.total(),
            ladder.deltas.iter().map(|kr| kr.delta).sum::<f64>()
        );

        // Quotes past maturity do not reach any remaining cash flow.
        assert_eq!(ladder.get(20.0), Some(0.0));
    }
}
