//! Structured input validation errors.
//!
//! The engines themselves are total on their precondition domains; these
//! errors belong to the validation layer that guards them. Validation
//! failures short-circuit before any sort or trial work begins.

use thiserror::Error;

/// Invalid end-user input, rejected before the engines run.
///
/// # Examples
///
/// ```
/// use viz_core::types::InputError;
///
/// let err = InputError::NonFiniteValue { index: 2, value: f64::NAN };
/// assert!(err.to_string().contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A value in the input sequence is NaN or infinite.
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue {
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A token could not be parsed as a number.
    #[error("\"{token}\" is not a valid number")]
    MalformedNumber {
        /// The token that failed to parse.
        token: String,
    },

    /// Fewer elements than the minimum the visualization supports.
    #[error("Please provide at least {need} numbers (got {got})")]
    TooFewElements {
        /// Number of elements provided.
        got: usize,
        /// Minimum required.
        need: usize,
    },

    /// More elements than the maximum the visualization supports.
    #[error("Please provide at most {limit} numbers (got {got})")]
    TooManyElements {
        /// Number of elements provided.
        got: usize,
        /// Maximum allowed.
        limit: usize,
    },

    /// A task duration bound is NaN or infinite.
    #[error("Task \"{task}\" has a non-finite duration bound")]
    NonFiniteDuration {
        /// Name of the offending task.
        task: String,
    },

    /// A task duration bound is negative.
    #[error("Task \"{task}\" durations must be non-negative")]
    NegativeDuration {
        /// Name of the offending task.
        task: String,
    },

    /// A task's minimum duration exceeds its maximum.
    #[error("Task \"{task}\" has an empty duration range: min {min} > max {max}")]
    EmptyDurationRange {
        /// Name of the offending task.
        task: String,
        /// The minimum bound.
        min: f64,
        /// The maximum bound.
        max: f64,
    },

    /// The availability threshold is zero, negative, or non-finite.
    #[error("Available hours must be positive (got {0})")]
    NonPositiveThreshold(f64),
}
