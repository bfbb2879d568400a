//! Parswap CLI - value a fixed-for-floating swap against a CCP par curve.
//!
//! # Usage
//!
//! ```bash
//! # NPV of the trade in a job file
//! parswap npv --config config/sample_trade.toml
//!
//! # 5y key-rate delta
//! parswap delta --config config/sample_trade.toml --tenor 5
//!
//! # Delta at every quoted tenor, as JSON
//! parswap --format json ladder --config config/sample_trade.toml
//!
//! # Built curve and remaining cash flows
//! parswap curve --config config/sample_trade.toml
//! parswap cashflows --config config/sample_trade.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

/// Crates whose events the verbosity flags control.
const LOG_TARGETS: &[&str] = &[
    "parswap",
    "parswap_core",
    "parswap_curves",
    "parswap_swaps",
    "parswap_config",
];

fn log_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(format!("warn,{directives}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(log_filter(cli.verbose, cli.quiet))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Npv(args) => commands::npv::execute(&args, format, quiet)?,
        Commands::Delta(args) => commands::delta::execute(&args, format, quiet)?,
        Commands::Ladder(args) => commands::ladder::execute(&args, format, quiet)?,
        Commands::Curve(args) => commands::curve::execute(&args, format, quiet)?,
        Commands::Cashflows(args) => commands::cashflows::execute(&args, format, quiet)?,
    }

    Ok(())
}
