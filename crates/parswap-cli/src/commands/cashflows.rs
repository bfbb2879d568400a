//! Cashflows command implementation.

use anyhow::Result;
use clap::Args;
use parswap_core::Date;
use parswap_swaps::SwapPricer;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::JobArgs;
use crate::error::CliError;
use crate::output::{format_amount, format_rate, print_rows};

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    #[command(flatten)]
    pub job: JobArgs,
}

/// One period of both legs, flattened for JSON/CSV.
#[derive(Debug, Serialize)]
struct PeriodRecord {
    accrual_start: Date,
    payment_date: Date,
    days: i64,
    discount_factor: f64,
    fixed_rate: f64,
    fixed_amount: f64,
    floating_rate: f64,
    floating_amount: f64,
}

#[derive(Tabled)]
struct PeriodRow {
    #[tabled(rename = "Start")]
    accrual_start: String,
    #[tabled(rename = "Payment")]
    payment_date: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "DF")]
    discount_factor: String,
    #[tabled(rename = "Fixed Rate")]
    fixed_rate: String,
    #[tabled(rename = "Fixed Amount")]
    fixed_amount: String,
    #[tabled(rename = "Float Rate")]
    floating_rate: String,
    #[tabled(rename = "Float Amount")]
    floating_amount: String,
}

impl From<&PeriodRecord> for PeriodRow {
    fn from(record: &PeriodRecord) -> Self {
        Self {
            accrual_start: record.accrual_start.to_string(),
            payment_date: record.payment_date.to_string(),
            days: record.days,
            discount_factor: format!("{:.12}", record.discount_factor),
            fixed_rate: format_rate(record.fixed_rate),
            fixed_amount: format_amount(record.fixed_amount),
            floating_rate: format_rate(record.floating_rate),
            floating_amount: format_amount(record.floating_amount),
        }
    }
}

/// Execute the cashflows command.
pub fn execute(args: &CashflowsArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let inputs = args.job.load()?;
    let pricer = SwapPricer::new(&inputs.trade, &inputs.curve, &inputs.fixings);
    let legs = pricer.cash_flows().map_err(CliError::from)?;

    let records: Vec<PeriodRecord> = legs
        .periods()
        .map(|(fixed, floating)| PeriodRecord {
            accrual_start: fixed.accrual_start,
            payment_date: fixed.payment_date,
            days: fixed.days(),
            discount_factor: inputs.curve.discount(fixed.payment_date),
            fixed_rate: fixed.rate,
            fixed_amount: fixed.amount,
            floating_rate: floating.rate,
            floating_amount: floating.amount,
        })
        .collect();
    let rows: Vec<PeriodRow> = records.iter().map(PeriodRow::from).collect();

    let title = format!(
        "Cash Flows: {} {} {}% vs floating",
        inputs.trade.direction(),
        format_amount(inputs.trade.notional()),
        inputs.trade.fixed_rate()
    );
    print_rows(
        &title,
        &rows,
        &records,
        &records.len().to_string(),
        format,
        quiet,
    )
}
