//! Trace generation: recursive randomized partition with full step emission.
//!
//! # Step Narrative
//!
//! The recursion processes the left partition completely, including all of
//! its emitted steps, before the right partition begins, so playback reads
//! as a coherent left-to-right narrative.
//!
//! # Randomness
//!
//! The uniform pivot choice is the sole source of randomness and the reason
//! runtime (not correctness) varies run to run. It is drawn from an
//! injectable [`UniformSource`], so a scripted source reproduces an exact
//! step sequence.

use viz_core::rng::{UniformSource, VizRng};
use viz_core::types::{ElementStatus, InputError, Trace};

use crate::recorder::StepRecorder;

/// Runs randomized quicksort over `values` and returns the full step trace.
///
/// Entropy-seeded; successive calls on identical input generally produce
/// different traces, though all are valid sorts. The caller's slice is never
/// mutated. Empty and single-element inputs yield a trivial trace without
/// ever drawing from the random source.
///
/// # Examples
///
/// ```rust
/// use viz_trace::generate_trace;
///
/// let trace = generate_trace(&[3.0, 1.0, 2.0]);
/// assert_eq!(trace.last().values(), vec![1.0, 2.0, 3.0]);
/// assert!(trace.last().all_sorted());
/// ```
pub fn generate_trace(values: &[f64]) -> Trace {
    let mut rng = VizRng::from_entropy();
    generate_trace_with(values, &mut rng)
}

/// Runs randomized quicksort with an injected random source.
///
/// Identical sources produce identical traces, enabling exact assertions in
/// tests and reproducible demos.
///
/// # Examples
///
/// ```rust
/// use viz_core::rng::VizRng;
/// use viz_trace::generate_trace_with;
///
/// let mut rng1 = VizRng::from_seed(7);
/// let mut rng2 = VizRng::from_seed(7);
/// let input = [4.0, 2.0, 9.0, 1.0];
/// assert_eq!(
///     generate_trace_with(&input, &mut rng1),
///     generate_trace_with(&input, &mut rng2),
/// );
/// ```
pub fn generate_trace_with<S: UniformSource>(values: &[f64], source: &mut S) -> Trace {
    let mut recorder = StepRecorder::new(values);
    recorder.emit("Initial array", None, None, None);

    if !recorder.is_empty() {
        let hi = recorder.len() - 1;
        sort_range(&mut recorder, source, 0, hi);
    }

    recorder.finish()
}

/// Hardened entry point: validates the input before any sort work begins.
///
/// # Errors
///
/// Returns [`InputError::NonFiniteValue`] if any value is NaN or infinite.
pub fn generate_trace_checked(values: &[f64]) -> Result<Trace, InputError> {
    validate_values(values)?;
    Ok(generate_trace(values))
}

/// Rejects sequences containing NaN or infinite values.
///
/// # Errors
///
/// Returns [`InputError::NonFiniteValue`] naming the first offending index.
pub fn validate_values(values: &[f64]) -> Result<(), InputError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(InputError::NonFiniteValue { index, value });
        }
    }
    Ok(())
}

/// Sorts the inclusive range `[lo, hi]`, emitting one step per comparison,
/// swap, and pivot decision.
fn sort_range<S: UniformSource>(
    recorder: &mut StepRecorder,
    source: &mut S,
    lo: usize,
    hi: usize,
) {
    if lo == hi {
        recorder.set_status(lo, ElementStatus::Sorted);
        recorder.emit(format!("Element at index {} is sorted", lo), None, None, None);
        return;
    }

    // Randomly select the pivot and move it to the front of the range.
    let pivot_index = source.pick_index(lo, hi);
    recorder.swap(lo, pivot_index);
    recorder.set_status(lo, ElementStatus::Pivot);
    let pivot = recorder.value(lo);
    recorder.emit(
        format!("Randomly selected pivot {} (index {})", pivot, lo),
        Some(lo),
        None,
        None,
    );

    // Partition: `i` is the boundary pointer, `j` the scan pointer.
    let mut i = lo + 1;
    for j in (lo + 1)..=hi {
        recorder.set_status(j, ElementStatus::Processing);
        let scanned = recorder.value(j);
        recorder.emit(
            format!("Comparing {} with pivot {}", scanned, pivot),
            Some(lo),
            Some(i),
            Some(j),
        );

        if scanned < pivot {
            recorder.swap(i, j);
            let moved_in = recorder.value(i);
            let moved_out = recorder.value(j);
            recorder.emit(
                format!(
                    "Swapped {} and {} because {} < {}",
                    moved_in, moved_out, moved_in, pivot
                ),
                Some(lo),
                Some(i),
                Some(j),
            );
            i += 1;
        } else {
            // Equal-to-pivot values stay on the greater-or-equal side.
            recorder.emit(
                format!("No swap needed because {} >= {}", scanned, pivot),
                Some(lo),
                Some(i),
                Some(j),
            );
        }

        // Slot j is reset; a status that travelled to slot i stays put.
        recorder.set_status(j, ElementStatus::Unsorted);
    }

    // Swap the pivot into its final sorted slot.
    let final_slot = i - 1;
    recorder.swap(lo, final_slot);
    recorder.set_status(final_slot, ElementStatus::Sorted);
    recorder.emit(
        format!(
            "Placed pivot {} in its correct position (index {})",
            pivot, final_slot
        ),
        Some(final_slot),
        None,
        None,
    );

    // Left subtree first: its steps precede the right subtree's.
    if final_slot > lo {
        sort_range(recorder, source, lo, final_slot - 1);
    }
    if i <= hi {
        sort_range(recorder, source, i, hi);
    }
}
