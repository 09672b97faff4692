//! Trace steps and the ordered trace they form.
//!
//! A [`Trace`] is the complete, replayable record of one randomized
//! quicksort run. Each [`TraceStep`] owns an independent snapshot of the
//! array at the instant it was emitted, so stepping backwards through a
//! trace never observes later mutations.

use serde::{Deserialize, Serialize};

use super::element::{ElementStatus, SortElement};

/// One recorded instant of the sort: a full array snapshot plus annotations.
///
/// `left_index` and `right_index` track the partition boundary pointer and
/// the scan pointer respectively; they are present only during an active
/// partition pass.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::{SortElement, TraceStep};
///
/// let step = TraceStep::new(
///     vec![SortElement::new(3.0), SortElement::new(1.0)],
///     "Initial array",
/// );
/// assert!(step.pivot_index.is_none());
/// assert_eq!(step.array.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Snapshot of the full array state at this instant.
    pub array: Vec<SortElement>,
    /// Index of the active pivot, if a partition pass is under way.
    pub pivot_index: Option<usize>,
    /// Partition boundary pointer, present only during an active pass.
    pub left_index: Option<usize>,
    /// Scan pointer, present only during an active pass.
    pub right_index: Option<usize>,
    /// Human-readable description of what happened at this step.
    pub description: String,
}

impl TraceStep {
    /// Creates a step with no pivot or pointer annotations.
    pub fn new(array: Vec<SortElement>, description: impl Into<String>) -> Self {
        Self {
            array,
            pivot_index: None,
            left_index: None,
            right_index: None,
            description: description.into(),
        }
    }

    /// Returns the value sequence of this step's snapshot.
    pub fn values(&self) -> Vec<f64> {
        self.array.iter().map(|element| element.value).collect()
    }

    /// Returns true if every element in this step is `Sorted`.
    pub fn all_sorted(&self) -> bool {
        self.array
            .iter()
            .all(|element| element.status == ElementStatus::Sorted)
    }
}

/// An ordered, finite, non-empty sequence of trace steps.
///
/// Traces always start with an "Initial array" step and end with an
/// "Array is fully sorted" step in which every element is `Sorted`. The
/// sequence is indexable for forward/backward playback.
///
/// # Examples
///
/// ```rust
/// use viz_core::types::{SortElement, Trace, TraceStep};
///
/// let trace = Trace::new(vec![
///     TraceStep::new(vec![SortElement::new(1.0)], "Initial array"),
///     TraceStep::new(vec![SortElement::new(1.0)], "Array is fully sorted"),
/// ]);
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.first().description, "Initial array");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Wraps an ordered step sequence.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty; a trace always contains at least the
    /// initial and terminal steps.
    pub fn new(steps: Vec<TraceStep>) -> Self {
        assert!(!steps.is_empty(), "a trace contains at least one step");
        Self { steps }
    }

    /// Returns the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; traces are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the step at `index`, if within bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    /// Returns the initial step.
    #[inline]
    pub fn first(&self) -> &TraceStep {
        &self.steps[0]
    }

    /// Returns the terminal step.
    #[inline]
    pub fn last(&self) -> &TraceStep {
        &self.steps[self.steps.len() - 1]
    }

    /// Iterates over the steps in playback order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    /// Returns the steps as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[TraceStep] {
        &self.steps
    }
}

impl std::ops::Index<usize> for Trace {
    type Output = TraceStep;

    fn index(&self, index: usize) -> &TraceStep {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
