//! The step recorder: working array plus ordered step sink.
//!
//! The recorder owns both the working `SortElement` array and the sequence
//! of emitted steps, so the sorting recursion appends to one explicit sink
//! instead of capturing outer mutable state. Every emission deep-copies the
//! working array: later mutation can never retroactively alter a previously
//! emitted step.

use viz_core::types::{ElementStatus, SortElement, Trace, TraceStep};

/// Working array and ordered step sink for one trace run.
///
/// # Snapshot Semantics
///
/// [`StepRecorder::emit`] clones the full working array into the new step.
/// The emitted steps are therefore value-independent of the working array,
/// which keeps earlier steps intact while the sort continues to mutate.
///
/// # Examples
///
/// ```rust
/// use viz_trace::StepRecorder;
///
/// let mut recorder = StepRecorder::new(&[2.0, 1.0]);
/// recorder.emit("Initial array", None, None, None);
/// recorder.swap(0, 1);
/// recorder.emit("after swap", None, None, None);
///
/// // The first snapshot is unaffected by the later swap
/// let trace = recorder.finish();
/// assert_eq!(trace.first().values(), vec![2.0, 1.0]);
/// assert_eq!(trace.last().values(), vec![1.0, 2.0]);
/// ```
pub struct StepRecorder {
    /// The live working array the sort mutates.
    items: Vec<SortElement>,
    /// Ordered step sink.
    steps: Vec<TraceStep>,
}

impl StepRecorder {
    /// Creates a recorder over a working copy of `values`, every element
    /// starting `Unsorted`. The caller's slice is never mutated.
    pub fn new(values: &[f64]) -> Self {
        Self {
            items: values.iter().copied().map(SortElement::new).collect(),
            steps: Vec::new(),
        }
    }

    /// Number of elements in the working array.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the working array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value at `index` in the working array.
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.items[index].value
    }

    /// Swaps two slots of the working array. Statuses travel with their
    /// elements.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Sets the status of the slot at `index`.
    #[inline]
    pub fn set_status(&mut self, index: usize, status: ElementStatus) {
        self.items[index].status = status;
    }

    /// Appends a step holding a deep copy of the current working array.
    pub fn emit(
        &mut self,
        description: impl Into<String>,
        pivot_index: Option<usize>,
        left_index: Option<usize>,
        right_index: Option<usize>,
    ) {
        self.steps.push(TraceStep {
            array: self.items.clone(),
            pivot_index,
            left_index,
            right_index,
            description: description.into(),
        });
    }

    /// Appends the forced terminal step and returns the finished trace.
    ///
    /// The terminal step takes the array state of the last emitted step and
    /// overwrites every status with `Sorted`, regardless of what the final
    /// partition pass left behind.
    ///
    /// # Panics
    ///
    /// Panics if no step was emitted; a run always records the initial step
    /// first.
    pub fn finish(mut self) -> Trace {
        let last = self
            .steps
            .last()
            .expect("the initial step is emitted before finish");
        let mut final_array = last.array.clone();
        for element in &mut final_array {
            element.status = ElementStatus::Sorted;
        }
        self.steps.push(TraceStep::new(final_array, "Array is fully sorted"));
        Trace::new(self.steps)
    }
}
