//! CLI error types.

use parswap_config::ConfigError;
use parswap_swaps::SwapError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Valuation failed.
    #[error("Valuation error: {0}")]
    Valuation(#[from] SwapError),

    /// Requested tenor is not one of the quoted tenors.
    #[error("Tenor {tenor} is not quoted. Available tenors: {available}")]
    UnquotedTenor {
        /// Requested tenor in years.
        tenor: f64,
        /// Comma-separated quoted tenors.
        available: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
