//! Present value and NPV.

use parswap_curves::Curve;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::cashflows::{CashFlow, LegCashFlows};
use crate::error::SwapResult;
use crate::fixings::FixingTable;
use crate::risk::{self, DeltaLadder};
use crate::trade::{Direction, Trade};

/// Leg present values and the holder's NPV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Net present value from the holder's side.
    pub npv: f64,
    /// Present value of the fixed leg.
    pub fixed_leg_pv: f64,
    /// Present value of the floating leg.
    pub floating_leg_pv: f64,
}

impl ValuationResult {
    /// Combines leg present values according to `direction`.
    #[must_use]
    pub fn from_legs(direction: Direction, fixed_leg_pv: f64, floating_leg_pv: f64) -> Self {
        Self {
            npv: direction.net(fixed_leg_pv, floating_leg_pv),
            fixed_leg_pv,
            floating_leg_pv,
        }
    }

    /// NPV truncated to whole currency units.
    ///
    /// Returns `None` if the NPV is not a finite number.
    #[must_use]
    pub fn npv_whole_units(&self) -> Option<Decimal> {
        Decimal::from_f64(self.npv).map(|npv| npv.trunc())
    }
}

/// Sum of discounted amounts.
///
/// Each flow is discounted with [`Curve::discount`] at its payment date.
#[must_use]
pub fn present_value(flows: &[CashFlow], curve: &Curve) -> f64 {
    flows.iter().map(|flow| flow.present_value(curve)).sum()
}

/// Values one trade against one curve and fixing set.
///
/// # Example
///
/// ```rust,ignore
/// let pricer = SwapPricer::new(&trade, &curve, &fixings);
/// let result = pricer.valuation()?;
/// let delta_5y = pricer.key_rate_delta(5.0)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SwapPricer<'a> {
    trade: &'a Trade,
    curve: &'a Curve,
    fixings: &'a FixingTable,
}

impl<'a> SwapPricer<'a> {
    /// Creates a pricer.
    #[must_use]
    pub fn new(trade: &'a Trade, curve: &'a Curve, fixings: &'a FixingTable) -> Self {
        Self {
            trade,
            curve,
            fixings,
        }
    }

    /// The trade being valued.
    #[must_use]
    pub fn trade(&self) -> &'a Trade {
        self.trade
    }

    /// The valuation curve.
    #[must_use]
    pub fn curve(&self) -> &'a Curve {
        self.curve
    }

    /// Remaining cash flows of both legs.
    pub fn cash_flows(&self) -> SwapResult<LegCashFlows> {
        self.trade.cash_flows(self.curve, self.fixings)
    }

    /// Discounted sum of `flows` on this pricer's curve.
    #[must_use]
    pub fn present_value(&self, flows: &[CashFlow]) -> f64 {
        present_value(flows, self.curve)
    }

    /// `(fixed_leg_pv, floating_leg_pv)`.
    pub fn pv_by_leg(&self) -> SwapResult<(f64, f64)> {
        let legs = self.cash_flows()?;
        Ok((
            self.present_value(&legs.fixed),
            self.present_value(&legs.floating),
        ))
    }

    /// Full valuation result.
    pub fn valuation(&self) -> SwapResult<ValuationResult> {
        let (fixed_leg_pv, floating_leg_pv) = self.pv_by_leg()?;
        let result = ValuationResult::from_legs(self.trade.direction(), fixed_leg_pv, floating_leg_pv);
        info!(
            direction = %self.trade.direction(),
            settlement = %self.curve.settlement_date(),
            npv = result.npv,
            "swap valued"
        );
        Ok(result)
    }

    /// Net present value: REC = fixed - floating, PAY = floating - fixed.
    pub fn npv(&self) -> SwapResult<f64> {
        Ok(self.valuation()?.npv)
    }

    /// Centered 1bp key-rate delta at `tenor`.
    ///
    /// See [`risk::key_rate_delta`].
    pub fn key_rate_delta(&self, tenor: f64) -> SwapResult<f64> {
        risk::key_rate_delta(self.trade, self.curve, self.fixings, tenor)
    }

    /// Key-rate deltas at every quoted tenor.
    pub fn delta_ladder(&self) -> SwapResult<DeltaLadder> {
        risk::delta_ladder(self.trade, self.curve, self.fixings)
    }
}
