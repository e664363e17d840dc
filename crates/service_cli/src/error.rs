//! CLI error types.

use crate::config::ConfigError;
use numerics_compare::ReportError;
use numerics_core::types::LinalgError;
use thiserror::Error;

/// Errors surfaced by the `numerics` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be emitted
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// A command-line value could not be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Matrix or vector input rejected
    #[error("Invalid linear system: {0}")]
    Linalg(#[from] LinalgError),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
