//! Tasks with bounded duration ranges.

use serde::{Deserialize, Serialize};

use super::error::InputError;

/// A task whose duration is uniformly distributed over `[min, max]` hours.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::Task;
///
/// let task = Task::new("Write report", 2.0, 4.0);
/// assert!(task.validate().is_ok());
/// assert_eq!(task.spread(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Display name of the task.
    pub name: String,
    /// Minimum duration in hours; must be non-negative.
    pub min_duration: f64,
    /// Maximum duration in hours; must be at least `min_duration`.
    pub max_duration: f64,
}

impl Task {
    /// Creates a task without validating it; call [`Task::validate`] before
    /// sampling from the range.
    pub fn new(name: impl Into<String>, min_duration: f64, max_duration: f64) -> Self {
        Self {
            name: name.into(),
            min_duration,
            max_duration,
        }
    }

    /// Checks that the duration range is well-formed.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if either bound is negative or non-finite, or if
    /// `min_duration > max_duration`.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.min_duration.is_finite() || !self.max_duration.is_finite() {
            return Err(InputError::NonFiniteDuration {
                task: self.name.clone(),
            });
        }
        if self.min_duration < 0.0 || self.max_duration < 0.0 {
            return Err(InputError::NegativeDuration {
                task: self.name.clone(),
            });
        }
        if self.min_duration > self.max_duration {
            return Err(InputError::EmptyDurationRange {
                task: self.name.clone(),
                min: self.min_duration,
                max: self.max_duration,
            });
        }
        Ok(())
    }

    /// Width of the duration range in hours.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.max_duration - self.min_duration
    }
}
