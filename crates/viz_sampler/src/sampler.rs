//! The Monte Carlo trial loop.
//!
//! # Overview
//!
//! The [`Sampler`] coordinates:
//! 1. Random duration draws (via an injectable
//!    [`UniformSource`](viz_core::rng::UniformSource))
//! 2. The independent trial loop (two draws per trial, summed)
//! 3. Aggregation into a [`SimulationResult`]
//!
//! Each invocation runs to completion in one unbroken unit of work and
//! shares no state with other invocations.

use tracing::debug;
use viz_core::rng::{UniformSource, VizRng};
use viz_core::types::SimulationResult;

use crate::config::SamplerConfig;
use crate::error::ConfigError;

/// Monte Carlo sampling engine.
///
/// Runs repeated independent trials against a validated configuration and
/// aggregates the outcome. Seeded configurations reproduce their results
/// call-to-call; unseeded ones draw from operating-system entropy.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::Task;
/// use viz_sampler::{Sampler, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .task_a(Task::new("A", 2.0, 2.0))
///     .task_b(Task::new("B", 3.0, 3.0))
///     .available_hours(5.0)
///     .n_trials(100)
///     .build()
///     .unwrap();
///
/// // Zero-variance tasks always sum to exactly 5.0, which meets the
/// // inclusive threshold.
/// let mut sampler = Sampler::new(config).unwrap();
/// let result = sampler.run();
/// assert_eq!(result.success_count, 100);
/// ```
pub struct Sampler {
    config: SamplerConfig,
    rng: VizRng,
}

impl Sampler {
    /// Creates a sampler with the given configuration.
    ///
    /// The internal random source is seeded from the configuration when a
    /// seed is present, from entropy otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed() {
            Some(seed) => VizRng::from_seed(seed),
            None => VizRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// Returns the sampler's configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Runs all trials and returns the aggregate result.
    ///
    /// Repeated calls on a seeded sampler continue the random sequence; to
    /// reproduce a run exactly, construct a fresh sampler with the same
    /// seed.
    pub fn run(&mut self) -> SimulationResult {
        run_trials(&self.config, &mut self.rng)
    }

    /// Runs all trials against an injected random source.
    ///
    /// Useful for exact assertions in tests: a scripted source controls
    /// every duration draw.
    pub fn run_with<S: UniformSource>(config: &SamplerConfig, source: &mut S) -> SimulationResult {
        run_trials(config, source)
    }
}

/// The trial loop: two independent uniform draws per trial, summed and
/// tested against the inclusive threshold.
fn run_trials<S: UniformSource>(config: &SamplerConfig, source: &mut S) -> SimulationResult {
    let task_a = config.task_a();
    let task_b = config.task_b();

    let mut durations = Vec::with_capacity(config.n_trials());
    for _ in 0..config.n_trials() {
        let duration_a = source.pick_duration(task_a.min_duration, task_a.max_duration);
        let duration_b = source.pick_duration(task_b.min_duration, task_b.max_duration);
        durations.push(duration_a + duration_b);
    }

    let result = SimulationResult::new(durations, config.available_hours());
    debug!(
        trials = result.total_trials,
        successes = result.success_count,
        probability = result.probability,
        "simulation complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use viz_core::rng::ScriptedSource;
    use viz_core::types::Task;

    fn zero_variance_config(available_hours: f64) -> SamplerConfig {
        SamplerConfig::builder()
            .task_a(Task::new("A", 2.0, 2.0))
            .task_b(Task::new("B", 3.0, 3.0))
            .available_hours(available_hours)
            .n_trials(100)
            .build()
            .unwrap()
    }

    #[test]
    fn test_zero_variance_inclusive_boundary_success() {
        // Every trial sums to exactly 5.0, which meets the inclusive bound.
        let mut sampler = Sampler::new(zero_variance_config(5.0)).unwrap();
        let result = sampler.run();
        assert_eq!(result.success_count, 100);
        assert_eq!(result.probability, 1.0);
    }

    #[test]
    fn test_zero_variance_boundary_failure() {
        // 5.0 > 4.999 on every trial.
        let mut sampler = Sampler::new(zero_variance_config(4.999)).unwrap();
        let result = sampler.run();
        assert_eq!(result.success_count, 0);
        assert_eq!(result.probability, 0.0);
    }

    #[test]
    fn test_durations_length_and_threshold() {
        let config = SamplerConfig::builder()
            .task_a(Task::new("A", 1.0, 3.0))
            .task_b(Task::new("B", 2.0, 5.0))
            .available_hours(6.0)
            .n_trials(500)
            .seed(42)
            .build()
            .unwrap();

        let mut sampler = Sampler::new(config).unwrap();
        let result = sampler.run();

        assert_eq!(result.durations.len(), 500);
        assert_eq!(result.total_trials, 500);
        assert_eq!(result.threshold, 6.0);
        assert!((0.0..=1.0).contains(&result.probability));
    }

    #[test]
    fn test_draws_stay_within_task_ranges() {
        let config = SamplerConfig::builder()
            .task_a(Task::new("A", 1.0, 3.0))
            .task_b(Task::new("B", 2.0, 5.0))
            .available_hours(6.0)
            .n_trials(1000)
            .seed(7)
            .build()
            .unwrap();

        let mut sampler = Sampler::new(config).unwrap();
        let result = sampler.run();

        for &duration in &result.durations {
            assert!(duration >= 3.0 && duration <= 8.0);
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let build = || {
            SamplerConfig::builder()
                .task_a(Task::new("A", 1.0, 4.0))
                .task_b(Task::new("B", 0.5, 2.0))
                .available_hours(4.0)
                .n_trials(200)
                .seed(99)
                .build()
                .unwrap()
        };

        let result1 = Sampler::new(build()).unwrap().run();
        let result2 = Sampler::new(build()).unwrap().run();
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_scripted_draws_are_exact() {
        let config = SamplerConfig::builder()
            .task_a(Task::new("A", 2.0, 4.0))
            .task_b(Task::new("B", 1.0, 3.0))
            .available_hours(5.0)
            .n_trials(100)
            .build()
            .unwrap();

        // Every draw at the midpoint: 3.0 + 2.0 = 5.0 per trial.
        let mut source = ScriptedSource::new(vec![0.5]);
        let result = Sampler::run_with(&config, &mut source);

        assert_eq!(result.success_count, 100);
        for &duration in &result.durations {
            assert_relative_eq!(duration, 5.0);
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_trials() {
        let result = SamplerConfig::builder()
            .task_a(Task::new("A", 2.0, 2.0))
            .task_b(Task::new("B", 3.0, 3.0))
            .available_hours(-1.0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))));
    }
}
