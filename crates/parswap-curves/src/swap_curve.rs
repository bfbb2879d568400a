//! Synthetic par swap curve on the payment schedule.
//!
//! Schedule points whose tenor is quoted take the quote directly. Every other
//! point is interpolated linearly in calendar days between the nearest quoted
//! points on either side. Points before the first or after the last quoted
//! point take that quote unchanged (flat extrapolation).

use crate::error::{CurveError, CurveResult};
use crate::quotes::ParRates;
use crate::schedule::PaymentSchedule;

/// Builds the par rate (as a fraction, not percent) for every schedule point.
///
/// # Errors
///
/// Returns `CurveError::NoKeyTenorOnSchedule` if no quoted tenor lands on the
/// schedule.
pub fn build_swap_curve(schedule: &PaymentSchedule, par_rates: &ParRates) -> CurveResult<Vec<f64>> {
    if par_rates.is_empty() {
        return Err(CurveError::EmptyQuotes);
    }

    // (schedule index, rate in percent) for each quoted point on the schedule.
    let keys: Vec<(usize, f64)> = (0..schedule.len())
        .filter_map(|i| par_rates.rate_at_quarter(i as u32).map(|rate| (i, rate)))
        .collect();

    if keys.is_empty() {
        return Err(CurveError::NoKeyTenorOnSchedule {
            points: schedule.len(),
        });
    }

    let dates = schedule.dates();
    let curve = (0..schedule.len())
        .map(|i| {
            let pos = keys.partition_point(|&(k, _)| k < i);
            match (pos.checked_sub(1).map(|p| keys[p]), keys.get(pos)) {
                (_, Some(&(k, rate))) if k == i => rate / 100.0,
                (Some((i1, rate1)), Some(&(i2, rate2))) => {
                    let elapsed = dates[i1].days_between(&dates[i]) as f64;
                    let span = dates[i1].days_between(&dates[i2]) as f64;
                    (rate1 + (rate2 - rate1) * elapsed / span) / 100.0
                }
                (None, Some(&(_, rate))) | (Some((_, rate)), None) => rate / 100.0,
                (None, None) => unreachable!("keys is non-empty"),
            }
        })
        .collect();

    Ok(curve)
}
