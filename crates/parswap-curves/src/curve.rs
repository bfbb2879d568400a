//! The built curve aggregate.

use std::fmt;
use std::sync::Arc;

use parswap_core::calendars::Calendar;
use parswap_core::daycounts::Act365Fixed;
use parswap_core::math::round_to;
use parswap_core::Date;
use serde::Serialize;
use tracing::{debug, warn};

use crate::bootstrap::bootstrap_discount_factors;
use crate::error::CurveResult;
use crate::quotes::ParRates;
use crate::schedule::{Location, PaymentSchedule};
use crate::swap_curve::build_swap_curve;
use crate::zero_curve::derive_zero_curve;
use crate::CURVE_PRECISION;

/// One schedule point of a built curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Schedule date.
    pub date: Date,
    /// Tenor in years from the anchor.
    pub tenor: f64,
    /// Interpolated par swap rate (fraction).
    pub swap_rate: f64,
    /// Bootstrapped discount factor.
    pub discount_factor: f64,
    /// Continuously compounded zero rate (percent).
    pub zero_rate: f64,
}

/// A par-swap curve built from one snapshot of quotes.
///
/// Built once and never mutated. Sensitivities rebuild a fresh curve from a
/// bumped copy of the quotes with [`Curve::with_par_rates`].
///
/// Zero-rate queries between schedule points interpolate linearly in calendar
/// days. Queries before the anchor or after the last point are flat
/// extrapolated from the nearest point.
#[derive(Clone)]
pub struct Curve {
    settlement: Date,
    par_rates: ParRates,
    calendar: Arc<dyn Calendar>,
    schedule: PaymentSchedule,
    swap: Vec<f64>,
    discount: Vec<f64>,
    zero: Vec<f64>,
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("settlement", &self.settlement)
            .field("calendar", &self.calendar.name())
            .field("quotes", &self.par_rates.len())
            .field("first", &self.schedule.first())
            .field("last", &self.schedule.last())
            .finish()
    }
}

impl Curve {
    /// Builds the schedule, swap curve, discount factors and zero curve.
    ///
    /// # Errors
    ///
    /// Returns an error if no quote lands on the schedule or the bootstrap
    /// produces a non-positive discount factor.
    pub fn build(
        settlement: Date,
        par_rates: ParRates,
        calendar: Arc<dyn Calendar>,
    ) -> CurveResult<Self> {
        let schedule = PaymentSchedule::build(settlement, calendar.as_ref())?;
        let swap = build_swap_curve(&schedule, &par_rates)?;
        let discount = bootstrap_discount_factors(&schedule, &swap)?;
        let zero = derive_zero_curve(&schedule, &swap, &discount, settlement);

        debug!(
            %settlement,
            calendar = calendar.name(),
            quotes = par_rates.len(),
            first = %schedule.first(),
            last = %schedule.last(),
            "curve built"
        );

        Ok(Self {
            settlement,
            par_rates,
            calendar,
            schedule,
            swap,
            discount,
            zero,
        })
    }

    /// Rebuilds the whole curve from different quotes, same settlement and calendar.
    pub fn with_par_rates(&self, par_rates: ParRates) -> CurveResult<Self> {
        Self::build(self.settlement, par_rates, Arc::clone(&self.calendar))
    }

    /// Settlement (valuation) date.
    #[must_use]
    pub fn settlement_date(&self) -> Date {
        self.settlement
    }

    /// Quotes the curve was built from.
    #[must_use]
    pub fn par_rates(&self) -> &ParRates {
        &self.par_rates
    }

    /// Business day calendar used for the schedule.
    #[must_use]
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// Quarterly payment schedule.
    #[must_use]
    pub fn schedule(&self) -> &PaymentSchedule {
        &self.schedule
    }

    /// Par swap rate (fraction) at a schedule date.
    #[must_use]
    pub fn swap_rate(&self, date: Date) -> Option<f64> {
        self.schedule.index_of(date).map(|i| self.swap[i])
    }

    /// Bootstrapped discount factor at a schedule date.
    #[must_use]
    pub fn discount_factor(&self, date: Date) -> Option<f64> {
        self.schedule.index_of(date).map(|i| self.discount[i])
    }

    /// Zero rate (percent) at a schedule date.
    #[must_use]
    pub fn zero_rate_at_pillar(&self, date: Date) -> Option<f64> {
        self.schedule.index_of(date).map(|i| self.zero[i])
    }

    /// Zero rate in percent at any date.
    ///
    /// Schedule points return the stored rate; dates in between interpolate
    /// linearly in calendar days, rounded to 12 decimals.
    #[must_use]
    pub fn zero_rate(&self, date: Date) -> f64 {
        let dates = self.schedule.dates();
        match self.schedule.locate(date) {
            Location::Exact(i) => self.zero[i],
            Location::Between(i1, i2) => {
                let (rate1, rate2) = (self.zero[i1], self.zero[i2]);
                let elapsed = dates[i1].days_between(&date) as f64;
                let span = dates[i1].days_between(&dates[i2]) as f64;
                round_to(rate1 + (rate2 - rate1) * elapsed / span, CURVE_PRECISION)
            }
            Location::Before => {
                warn!(%date, anchor = %self.schedule.first(), "zero rate flat-extrapolated before anchor");
                self.zero[0]
            }
            Location::After => {
                warn!(%date, last = %self.schedule.last(), "zero rate flat-extrapolated after last point");
                self.zero[self.zero.len() - 1]
            }
        }
    }

    /// Discount factor at any date from the zero curve.
    ///
    /// `exp(-t * z / 100)` with `t` in Act/365 years from settlement, rounded
    /// to 12 decimals. Agrees with [`Curve::discount_factor`] at schedule
    /// dates up to rounding.
    #[must_use]
    pub fn discount(&self, date: Date) -> f64 {
        let year_fraction = self.settlement.days_between(&date) as f64 / Act365Fixed::BASIS;
        round_to(
            (-year_fraction * (self.zero_rate(date) / 100.0)).exp(),
            CURVE_PRECISION,
        )
    }

    /// Iterates all schedule points.
    pub fn pillars(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.schedule
            .dates()
            .iter()
            .enumerate()
            .map(move |(i, &date)| CurvePoint {
                date,
                tenor: self.schedule.tenor_at(i),
                swap_rate: self.swap[i],
                discount_factor: self.discount[i],
                zero_rate: self.zero[i],
            })
    }
}
