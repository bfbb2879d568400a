//! Discount factor bootstrap from the synthetic par swap curve.
//!
//! Each schedule date `t_n` is the maturity of a quarterly par swap paying the
//! swap curve rate `s_n`. With accrual periods `d_j` (actual days between
//! consecutive schedule dates) and already-solved factors `P_j`:
//!
//! $$P_n = \frac{1 - s_n \sum_{j=1}^{n-1} \frac{d_j}{365} P_j}{1 + s_n \frac{d_n}{365}}$$
//!
//! so the swap maturing at `t_n` prices to par. `P_0 = 1` at the anchor.

use parswap_core::daycounts::Act365Fixed;
use parswap_core::math::round_to;

use crate::error::{CurveError, CurveResult};
use crate::schedule::PaymentSchedule;
use crate::CURVE_PRECISION;

/// Bootstraps one discount factor per schedule date.
///
/// `swap_curve[i]` is the par rate (fraction) of the swap maturing at
/// schedule point `i`. Factors are rounded to 12 decimals as they are solved,
/// and later factors are solved from the rounded earlier ones.
///
/// # Errors
///
/// Returns `CurveError::InvalidValue` if the inputs have different lengths or a
/// factor comes out non-finite or non-positive.
pub fn bootstrap_discount_factors(
    schedule: &PaymentSchedule,
    swap_curve: &[f64],
) -> CurveResult<Vec<f64>> {
    if swap_curve.len() != schedule.len() {
        return Err(CurveError::invalid_value(format!(
            "swap curve has {} points, schedule has {}",
            swap_curve.len(),
            schedule.len()
        )));
    }

    let dates = schedule.dates();
    let mut factors = Vec::with_capacity(dates.len());
    factors.push(1.0);

    // Running sum of days(t_{j-1}, t_j) * P_j over the solved points.
    let mut weighted_days = 0.0;

    for n in 1..dates.len() {
        let rate = swap_curve[n];
        let accrual_days = dates[n - 1].days_between(&dates[n]) as f64;

        let numerator = 1.0 - (weighted_days / Act365Fixed::BASIS) * rate;
        let factor = round_to(
            numerator / (1.0 + rate * accrual_days / Act365Fixed::BASIS),
            CURVE_PRECISION,
        );

        if !factor.is_finite() || factor <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "discount factor {factor} at {} is not positive",
                dates[n]
            )));
        }

        weighted_days += accrual_days * factor;
        factors.push(factor);
    }

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parswap_core::calendars::WeekendCalendar;
    use parswap_core::Date;

    fn schedule() -> PaymentSchedule {
        PaymentSchedule::build(Date::parse("2021-12-20").unwrap(), &WeekendCalendar).unwrap()
    }

    #[test]
    fn test_anchor_and_first_period() {
        let schedule = schedule();
        let swap = vec![0.02; schedule.len()];
        let df = bootstrap_discount_factors(&schedule, &swap).unwrap();

        assert_eq!(df[0], 1.0);
        let days = schedule.first().days_between(&schedule.dates()[1]) as f64;
        assert_eq!(df[1], round_to(1.0 / (1.0 + 0.02 * days / 365.0), 12));
    }

    #[test]
    fn test_each_par_swap_prices_to_par() {
        let schedule = schedule();
        let swap: Vec<f64> = (0..schedule.len()).map(|i| 0.01 + 0.0001 * i as f64).collect();
        let df = bootstrap_discount_factors(&schedule, &swap).unwrap();
        let dates = schedule.dates();

        for n in 1..dates.len() {
            let annuity: f64 = (1..=n)
                .map(|j| dates[j - 1].days_between(&dates[j]) as f64 / 365.0 * df[j])
                .sum();
            // Fixed leg at par rate + final factor = 1.
            assert_relative_eq!(swap[n] * annuity + df[n], 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_factors_decrease_for_positive_rates() {
        let schedule = schedule();
        let swap = vec![0.015; schedule.len()];
        let df = bootstrap_discount_factors(&schedule, &swap).unwrap();

        assert!(df.windows(2).all(|w| w[1] <= w[0]));
        assert!(df.iter().all(|&f| f > 0.0 && f <= 1.0));
    }

    #[test]
    fn test_length_mismatch() {
        let schedule = schedule();
        let err = bootstrap_discount_factors(&schedule, &[0.01; 3]).unwrap_err();
        assert!(matches!(err, CurveError::InvalidValue { .. }));
    }
}
