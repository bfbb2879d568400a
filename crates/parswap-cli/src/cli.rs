//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CashflowsArgs, CurveArgs, DeltaArgs, LadderArgs, NpvArgs};

/// Parswap - interest rate swap valuation against a CCP par curve
#[derive(Parser)]
#[command(name = "parswap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value the trade: fixed leg PV, floating leg PV and NPV
    Npv(NpvArgs),

    /// Centered 1bp key-rate delta at one quoted tenor
    Delta(DeltaArgs),

    /// Key-rate deltas at every quoted tenor
    Ladder(LadderArgs),

    /// Show the built curve (swap rate, discount factor, zero rate)
    Curve(CurveArgs),

    /// Show the remaining cash flows of both legs
    Cashflows(CashflowsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
