//! CLI error types.

use thiserror::Error;
use viz_core::types::InputError;
use viz_sampler::ConfigError;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI errors.
///
/// Validation failures are surfaced to the end user with the descriptive
/// message of the underlying error; nothing reaches the engines before
/// validation passes.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument combination or value the CLI cannot act on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// End-user input rejected by the validation layer.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Sampler configuration rejected at build time.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Result serialisation failed.
    #[error("Serialisation failed: {0}")]
    Serialise(#[from] serde_json::Error),
}
