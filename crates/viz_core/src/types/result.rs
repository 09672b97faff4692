//! Aggregate simulation reports.

use serde::{Deserialize, Serialize};

/// Aggregate outcome of a Monte Carlo simulation run.
///
/// Produced atomically after all trials complete; there is no streaming of
/// per-trial results. `durations` holds one total duration per trial, so its
/// length always equals `total_trials`.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::SimulationResult;
///
/// let result = SimulationResult::new(vec![4.0, 5.0, 6.0], 5.0);
/// assert_eq!(result.success_count, 2);
/// assert_eq!(result.total_trials, 3);
/// assert!((result.probability - 2.0 / 3.0).abs() < 1e-15);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Number of trials whose total duration met the threshold.
    pub success_count: usize,
    /// Total number of trials run.
    pub total_trials: usize,
    /// `success_count / total_trials`, in `[0, 1]`.
    pub probability: f64,
    /// Per-trial total durations, one entry per trial.
    pub durations: Vec<f64>,
    /// The availability bound the trials were tested against (inclusive).
    pub threshold: f64,
}

impl SimulationResult {
    /// Builds a result from per-trial durations and the threshold they were
    /// tested against. A trial succeeds when its duration is `<= threshold`.
    pub fn new(durations: Vec<f64>, threshold: f64) -> Self {
        let total_trials = durations.len();
        let success_count = durations.iter().filter(|&&d| d <= threshold).count();
        let probability = if total_trials == 0 {
            0.0
        } else {
            success_count as f64 / total_trials as f64
        };
        Self {
            success_count,
            total_trials,
            probability,
            durations,
            threshold,
        }
    }

    /// Mean of the per-trial durations.
    pub fn mean_duration(&self) -> f64 {
        if self.durations.is_empty() {
            return f64::NAN;
        }
        self.durations.iter().sum::<f64>() / self.durations.len() as f64
    }

    /// Shortest observed trial duration.
    pub fn min_duration(&self) -> f64 {
        self.durations.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Longest observed trial duration.
    pub fn max_duration(&self) -> f64 {
        self.durations
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_success_counting_inclusive_boundary() {
        let result = SimulationResult::new(vec![5.0, 5.0, 5.1], 5.0);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.total_trials, 3);
        assert_relative_eq!(result.probability, 2.0 / 3.0);
    }

    #[test]
    fn test_probability_bounds() {
        let all_pass = SimulationResult::new(vec![1.0; 10], 2.0);
        assert_eq!(all_pass.probability, 1.0);

        let none_pass = SimulationResult::new(vec![3.0; 10], 2.0);
        assert_eq!(none_pass.probability, 0.0);
    }

    #[test]
    fn test_duration_summary() {
        let result = SimulationResult::new(vec![2.0, 4.0, 6.0], 5.0);
        assert_relative_eq!(result.mean_duration(), 4.0);
        assert_relative_eq!(result.min_duration(), 2.0);
        assert_relative_eq!(result.max_duration(), 6.0);
    }

    #[test]
    fn test_durations_length_matches_trials() {
        let result = SimulationResult::new(vec![1.0, 2.0, 3.0, 4.0], 2.5);
        assert_eq!(result.durations.len(), result.total_trials);
    }
}
