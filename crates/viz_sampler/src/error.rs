//! Error types for the Monte Carlo sampler.
//!
//! Configuration errors occur at build time, before any trial work begins;
//! the trial loop itself has no failure modes.

use thiserror::Error;
use viz_core::types::InputError;

/// Configuration error for the Monte Carlo sampler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Trial count outside the supported range.
    #[error("Invalid trial count {0}: must be in range [100, 10_000]")]
    InvalidTrialCount(usize),

    /// The availability threshold is zero, negative, or non-finite.
    #[error("Invalid availability threshold {0}: must be positive and finite")]
    InvalidThreshold(f64),

    /// A task's duration range failed validation.
    #[error(transparent)]
    InvalidTask(#[from] InputError),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
