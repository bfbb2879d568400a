//! CLI command implementations.

pub mod cashflows;
pub mod curve;
pub mod delta;
pub mod ladder;
pub mod npv;

// Re-export submodules for convenience
pub use cashflows::CashflowsArgs;
pub use curve::CurveArgs;
pub use delta::DeltaArgs;
pub use ladder::LadderArgs;
pub use npv::NpvArgs;

use std::path::PathBuf;

use clap::Args;
use parswap_config::{ValuationConfig, ValuationInputs};
use tracing::debug;

use crate::error::CliResult;

/// Valuation job file shared by every command.
#[derive(Args, Debug)]
pub struct JobArgs {
    /// Valuation job file (.toml or .json)
    #[arg(short, long, env = "PARSWAP_CONFIG")]
    pub config: PathBuf,
}

impl JobArgs {
    /// Loads, validates and builds the trade, curve and fixings.
    pub fn load(&self) -> CliResult<ValuationInputs> {
        debug!(config = %self.config.display(), "loading valuation job");
        Ok(ValuationConfig::from_file(&self.config)?.load()?)
    }
}
