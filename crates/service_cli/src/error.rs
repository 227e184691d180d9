//! Error types for the CLI.

use pricer_gbs::analytical::{PricingError, ValidationError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command argument was malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The pricing library rejected the request.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// JSON output failed to serialise.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
