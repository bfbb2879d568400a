//! NPV command implementation.

use anyhow::Result;
use clap::Args;
use parswap_core::Date;
use parswap_swaps::{Direction, SwapPricer};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::JobArgs;
use crate::error::CliError;
use crate::output::{format_amount, format_whole, print_report, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    #[command(flatten)]
    pub job: JobArgs,
}

#[derive(Debug, Serialize)]
struct NpvReport {
    settlement_date: Date,
    direction: Direction,
    fixed_rate: f64,
    notional: f64,
    periods: usize,
    fixed_leg_pv: f64,
    floating_leg_pv: f64,
    npv: f64,
    npv_whole_units: Option<Decimal>,
}

/// Execute the npv command.
pub fn execute(args: &NpvArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let inputs = args.job.load()?;
    let pricer = SwapPricer::new(&inputs.trade, &inputs.curve, &inputs.fixings);

    let periods = pricer.cash_flows().map_err(CliError::from)?.len();
    let result = pricer.valuation().map_err(CliError::from)?;

    let report = NpvReport {
        settlement_date: inputs.curve.settlement_date(),
        direction: inputs.trade.direction(),
        fixed_rate: inputs.trade.fixed_rate(),
        notional: inputs.trade.notional(),
        periods,
        fixed_leg_pv: result.fixed_leg_pv,
        floating_leg_pv: result.floating_leg_pv,
        npv: result.npv,
        npv_whole_units: result.npv_whole_units(),
    };

    let rows = vec![
        KeyValue::new("Settlement", report.settlement_date.to_string()),
        KeyValue::new("Direction", report.direction.to_string()),
        KeyValue::new("Fixed Rate", format!("{}%", report.fixed_rate)),
        KeyValue::new("Notional", format_amount(report.notional)),
        KeyValue::new("Remaining Periods", report.periods.to_string()),
        KeyValue::new("Fixed Leg PV", format_amount(report.fixed_leg_pv)),
        KeyValue::new("Floating Leg PV", format_amount(report.floating_leg_pv)),
        KeyValue::new("NPV", format_whole(report.npv_whole_units)),
    ];

    let summary = report
        .npv_whole_units
        .map_or_else(|| report.npv.to_string(), |npv| npv.to_string());

    print_report("Swap Valuation", &rows, &report, &summary, format, quiet)
}
