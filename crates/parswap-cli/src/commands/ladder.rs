//! Ladder command implementation.

use anyhow::Result;
use clap::Args;
use parswap_swaps::SwapPricer;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::JobArgs;
use crate::error::CliError;
use crate::output::{format_amount, format_tenor, print_rows};

/// Arguments for the ladder command.
#[derive(Args, Debug)]
pub struct LadderArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Hide tenors with zero delta
    #[arg(long)]
    pub nonzero: bool,
}

#[derive(Tabled)]
struct LadderRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Delta")]
    delta: String,
}

/// Execute the ladder command.
pub fn execute(args: &LadderArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let inputs = args.job.load()?;
    let pricer = SwapPricer::new(&inputs.trade, &inputs.curve, &inputs.fixings);
    let mut ladder = pricer.delta_ladder().map_err(CliError::from)?;

    if args.nonzero {
        ladder.deltas.retain(|kr| kr.delta != 0.0);
    }
    let total = ladder.total();

    let mut rows: Vec<LadderRow> = ladder
        .iter()
        .map(|kr| LadderRow {
            tenor: format_tenor(kr.tenor),
            delta: format_amount(kr.delta),
        })
        .collect();
    rows.push(LadderRow {
        tenor: "Total".to_string(),
        delta: format_amount(total),
    });

    print_rows(
        "Key-Rate Delta Ladder",
        &rows,
        &ladder.deltas,
        &total.to_string(),
        format,
        quiet,
    )
}
