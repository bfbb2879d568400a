//! Coupon schedule and per-leg cash flow generation.
//!
//! Both legs share one quarterly schedule rolled from the effective date.
//! Periods whose payment date is on or before settlement have already been
//! paid and are skipped. The first remaining period of a seasoned trade uses
//! the published fixing; every later period implies its floating rate from
//! consecutive curve discount factors.

use std::fmt;

use parswap_core::calendars::Calendar;
use parswap_core::daycounts::Act365Fixed;
use parswap_core::Date;
use parswap_curves::schedule::PAYMENT_INTERVAL_MONTHS;
use parswap_curves::Curve;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::SwapResult;
use crate::fixings::FixingTable;
use crate::trade::Trade;

/// Which leg a cash flow belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LegType {
    /// Fixed-rate leg.
    Fixed,
    /// Floating-rate leg.
    Floating,
}

impl fmt::Display for LegType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Floating => write!(f, "Floating"),
        }
    }
}

/// One coupon of one leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlow {
    /// Start of the accrual period.
    pub accrual_start: Date,
    /// Payment date (end of the accrual period).
    pub payment_date: Date,
    /// Act/365 accrual fraction.
    pub year_fraction: f64,
    /// Coupon rate as a fraction (0.019275 for 1.9275%).
    pub rate: f64,
    /// Undiscounted amount in currency units.
    pub amount: f64,
}

impl CashFlow {
    /// Accrued days in the period.
    #[must_use]
    pub fn days(&self) -> i64 {
        self.accrual_start.days_between(&self.payment_date)
    }

    /// Amount discounted to settlement.
    #[must_use]
    pub fn present_value(&self, curve: &Curve) -> f64 {
        curve.discount(self.payment_date) * self.amount
    }
}

/// Cash flows of both legs, period-aligned and in payment-date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegCashFlows {
    /// Fixed leg coupons.
    pub fixed: Vec<CashFlow>,
    /// Floating leg coupons.
    pub floating: Vec<CashFlow>,
}

impl LegCashFlows {
    /// Flows of one leg.
    #[must_use]
    pub fn leg(&self, leg: LegType) -> &[CashFlow] {
        match leg {
            LegType::Fixed => &self.fixed,
            LegType::Floating => &self.floating,
        }
    }

    /// Number of remaining periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixed.len()
    }

    /// True if nothing is left to pay.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty()
    }

    /// Iterates `(fixed, floating)` pairs for each period.
    pub fn periods(&self) -> impl Iterator<Item = (&CashFlow, &CashFlow)> + '_ {
        self.fixed.iter().zip(self.floating.iter())
    }
}

/// All coupon dates of the trade, starting with the effective date roll.
///
/// Index 0 is the (adjusted) effective date; each later entry is a payment
/// date that also starts the next period. A date is kept while its Modified
/// Following roll is on or before termination. When the effective date is
/// the last business day of its month every date is pinned to month end.
///
/// # Errors
///
/// Returns an error if month stepping leaves the supported date range.
pub fn coupon_dates<C: Calendar + ?Sized>(trade: &Trade, calendar: &C) -> SwapResult<Vec<Date>> {
    let effective = trade.effective_date();
    let termination = trade.termination_date();
    let end_of_month = calendar.is_end_of_month(effective);

    let mut dates = Vec::new();
    let mut period = 0;
    loop {
        let rolled = effective.add_months(period * PAYMENT_INTERVAL_MONTHS)?;
        let adjusted = calendar.modified_following(rolled);
        if adjusted > termination {
            break;
        }
        dates.push(if end_of_month {
            calendar.last_business_day_of_month(rolled)
        } else {
            adjusted
        });
        period += 1;
    }

    Ok(dates)
}

/// Single-curve forward rate between two discount factors.
fn implied_forward(start_df: f64, end_df: f64, year_fraction: f64) -> f64 {
    (start_df / end_df - 1.0) / year_fraction
}

/// Generates the remaining cash flows of both legs.
///
/// # Errors
///
/// Returns [`SwapError::MissingFixing`](crate::SwapError::MissingFixing) if
/// the period running at settlement has no published fixing, or a date error
/// from schedule generation.
pub fn generate(trade: &Trade, curve: &Curve, fixings: &FixingTable) -> SwapResult<LegCashFlows> {
    let calendar = curve.calendar();
    let settlement = curve.settlement_date();
    let dates = coupon_dates(trade, calendar)?;

    let fixed_rate = trade.fixed_rate() / 100.0;
    let notional = trade.notional();

    let mut legs = LegCashFlows::default();
    let mut previous_df: Option<f64> = None;

    for window in dates.windows(2) {
        let (accrual_start, payment_date) = (window[0], window[1]);
        if payment_date <= settlement {
            continue;
        }

        let days = accrual_start.days_between(&payment_date) as f64;
        let year_fraction = days / Act365Fixed::BASIS;
        let df = curve.discount(payment_date);

        let floating_rate = match previous_df {
            Some(start_df) => implied_forward(start_df, df, year_fraction),
            None if accrual_start <= settlement => {
                fixings.fixing_for_period(accrual_start, calendar)? / 100.0
            }
            None => implied_forward(curve.discount(accrual_start), df, year_fraction),
        };
        previous_df = Some(df);

        let fixed_amount = fixed_rate * notional * days / Act365Fixed::BASIS;
        let floating_amount = floating_rate * notional * days / Act365Fixed::BASIS;

        trace!(
            %accrual_start,
            %payment_date,
            floating_rate,
            fixed_amount,
            floating_amount,
            "swap period"
        );

        legs.fixed.push(CashFlow {
            accrual_start,
            payment_date,
            year_fraction,
            rate: fixed_rate,
            amount: fixed_amount,
        });
        legs.floating.push(CashFlow {
            accrual_start,
            payment_date,
            year_fraction,
            rate: floating_rate,
            amount: floating_amount,
        });
    }

    debug!(
        %settlement,
        coupon_dates = dates.len(),
        remaining = legs.len(),
        "generated swap cash flows"
    );

    Ok(legs)
}

impl Trade {
    /// Remaining cash flows of both legs against `curve`.
    ///
    /// See [`generate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the running period has no fixing.
    pub fn cash_flows(&self, curve: &Curve, fixings: &FixingTable) -> SwapResult<LegCashFlows> {
        generate(self, curve, fixings)
    }
}
