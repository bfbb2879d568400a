//! Delta command implementation.

use anyhow::Result;
use clap::Args;
use parswap_swaps::risk::DELTA_SHIFT_BPS;
use parswap_swaps::SwapPricer;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::JobArgs;
use crate::error::CliError;
use crate::output::{format_amount, format_tenor, print_report, KeyValue};

/// Arguments for the delta command.
#[derive(Args, Debug)]
pub struct DeltaArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Quoted tenor to bump, in years (e.g. 5 or 0.25)
    #[arg(short, long)]
    pub tenor: f64,
}

#[derive(Debug, Serialize)]
struct DeltaReport {
    tenor: f64,
    shift_bps: f64,
    delta: f64,
}

/// Execute the delta command.
pub fn execute(args: &DeltaArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let inputs = args.job.load()?;
    let quotes = inputs.curve.par_rates();

    if !quotes.contains(args.tenor) {
        let available = quotes
            .key_tenors()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(CliError::UnquotedTenor {
            tenor: args.tenor,
            available,
        }
        .into());
    }

    let pricer = SwapPricer::new(&inputs.trade, &inputs.curve, &inputs.fixings);
    let delta = pricer.key_rate_delta(args.tenor).map_err(CliError::from)?;

    let report = DeltaReport {
        tenor: args.tenor,
        shift_bps: DELTA_SHIFT_BPS,
        delta,
    };
    let rows = vec![
        KeyValue::new("Tenor", format_tenor(report.tenor)),
        KeyValue::new("Shift", format!("±{} bp", report.shift_bps)),
        KeyValue::new("Delta", format_amount(report.delta)),
    ];

    print_report(
        "Key-Rate Delta",
        &rows,
        &report,
        &report.delta.to_string(),
        format,
        quiet,
    )
}
