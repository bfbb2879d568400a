//! Continuously compounded zero rates implied by the discount factors.

use parswap_core::daycounts::Act365Fixed;
use parswap_core::math::round_to;
use parswap_core::Date;

use crate::schedule::PaymentSchedule;
use crate::CURVE_PRECISION;

/// Derives zero rates in percent for every schedule point.
///
/// The anchor takes the anchor swap rate; every later point is
/// `-ln(P) / (days(settlement, t) / 365)`. Year fractions are measured from the
/// unadjusted settlement date.
#[must_use]
pub fn derive_zero_curve(
    schedule: &PaymentSchedule,
    swap_curve: &[f64],
    discount_factors: &[f64],
    settlement: Date,
) -> Vec<f64> {
    schedule
        .dates()
        .iter()
        .enumerate()
        .map(|(i, date)| {
            if i == 0 {
                round_to(swap_curve[0] * 100.0, CURVE_PRECISION)
            } else {
                let year_fraction = settlement.days_between(date) as f64 / Act365Fixed::BASIS;
                round_to(
                    -discount_factors[i].ln() / year_fraction * 100.0,
                    CURVE_PRECISION,
                )
            }
        })
        .collect()
}
