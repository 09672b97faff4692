//! Sampler configuration.
//!
//! This module provides the validated configuration type and builder for
//! Monte Carlo simulation runs. Validation happens at build time and again
//! in [`Sampler::new`](crate::Sampler::new); violations short-circuit before
//! any trial work begins.

use viz_core::types::Task;

use crate::error::ConfigError;

/// Minimum number of trials allowed.
pub const MIN_TRIALS: usize = 100;

/// Maximum number of trials allowed.
pub const MAX_TRIALS: usize = 10_000;

/// Default number of trials when the caller does not specify one.
pub const DEFAULT_TRIALS: usize = 1_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the two tasks, the availability
/// threshold, and the trial count. Use [`SamplerConfigBuilder`] to construct
/// instances; every built instance has passed validation.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::Task;
/// use viz_sampler::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .task_a(Task::new("Write report", 2.0, 4.0))
///     .task_b(Task::new("Review slides", 3.0, 6.0))
///     .available_hours(8.0)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 1000);
/// assert_eq!(config.available_hours(), 8.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    /// The first task.
    task_a: Task,
    /// The second task.
    task_b: Task,
    /// Availability threshold in hours (inclusive success bound).
    available_hours: f64,
    /// Number of independent trials.
    n_trials: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the first task.
    #[inline]
    pub fn task_a(&self) -> &Task {
        &self.task_a
    }

    /// Returns the second task.
    #[inline]
    pub fn task_b(&self) -> &Task {
        &self.task_b
    }

    /// Returns the availability threshold in hours.
    #[inline]
    pub fn available_hours(&self) -> f64 {
        self.available_hours
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - either task has a negative or inverted duration range
    /// - `available_hours` is zero, negative, or non-finite
    /// - `n_trials` is outside `[100, 10_000]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.task_a.validate()?;
        self.task_b.validate()?;
        if !self.available_hours.is_finite() || self.available_hours <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.available_hours));
        }
        if self.n_trials < MIN_TRIALS || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::Task;
/// use viz_sampler::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .task_a(Task::new("A", 1.0, 2.0))
///     .task_b(Task::new("B", 1.0, 3.0))
///     .available_hours(4.0)
///     .n_trials(500)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    task_a: Option<Task>,
    task_b: Option<Task>,
    available_hours: Option<f64>,
    n_trials: Option<usize>,
    seed: Option<u64>,
}

impl SamplerConfigBuilder {
    /// Sets the first task.
    #[inline]
    pub fn task_a(mut self, task: Task) -> Self {
        self.task_a = Some(task);
        self
    }

    /// Sets the second task.
    #[inline]
    pub fn task_b(mut self, task: Task) -> Self {
        self.task_b = Some(task);
        self
    }

    /// Sets the availability threshold in hours.
    #[inline]
    pub fn available_hours(mut self, hours: f64) -> Self {
        self.available_hours = Some(hours);
        self
    }

    /// Sets the number of trials.
    ///
    /// # Arguments
    ///
    /// * `n_trials` - Number of trials in [100, 10_000]; defaults to 1000
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required field is missing or any field
    /// fails validation.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let task_a = self.task_a.ok_or(ConfigError::InvalidParameter {
            name: "task_a",
            value: "must be specified".to_string(),
        })?;

        let task_b = self.task_b.ok_or(ConfigError::InvalidParameter {
            name: "task_b",
            value: "must be specified".to_string(),
        })?;

        let available_hours = self.available_hours.ok_or(ConfigError::InvalidParameter {
            name: "available_hours",
            value: "must be specified".to_string(),
        })?;

        let config = SamplerConfig {
            task_a,
            task_b,
            available_hours,
            n_trials: self.n_trials.unwrap_or(DEFAULT_TRIALS),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
