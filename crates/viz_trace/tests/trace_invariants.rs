//! Invariant tests for the trace engine.
//!
//! These properties hold for every input and every pivot choice:
//!
//! 1. **Sortedness**: the final step's value sequence is non-decreasing
//! 2. **Multiset preservation**: every step holds a permutation of the input
//! 3. **Step count lower bound**: inputs of length n >= 2 yield >= n steps
//! 4. **Terminal status**: every element in the final step is Sorted
//! 5. **Snapshot independence**: the initial step survives the full run

use proptest::prelude::*;
use viz_core::rng::{ScriptedSource, VizRng};
use viz_core::types::ElementStatus;
use viz_trace::{generate_trace, generate_trace_with};

/// Sorts a value sequence with a total order (inputs are always finite).
fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

fn arb_input() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0f64, 0..32)
}

proptest! {
    #[test]
    fn prop_final_step_is_sorted(values in arb_input(), seed in any::<u64>()) {
        let mut rng = VizRng::from_seed(seed);
        let trace = generate_trace_with(&values, &mut rng);
        prop_assert_eq!(trace.last().values(), sorted(values));
    }

    #[test]
    fn prop_every_step_preserves_the_multiset(values in arb_input(), seed in any::<u64>()) {
        let mut rng = VizRng::from_seed(seed);
        let trace = generate_trace_with(&values, &mut rng);
        let reference = sorted(values.clone());
        for step in &trace {
            prop_assert_eq!(step.array.len(), values.len());
            prop_assert_eq!(sorted(step.values()), reference.clone());
        }
    }

    #[test]
    fn prop_step_count_lower_bound(values in prop::collection::vec(-1000.0..1000.0f64, 2..32),
                                   seed in any::<u64>()) {
        let mut rng = VizRng::from_seed(seed);
        let trace = generate_trace_with(&values, &mut rng);
        prop_assert!(trace.len() >= values.len());
    }

    #[test]
    fn prop_terminal_step_all_sorted(values in arb_input(), seed in any::<u64>()) {
        let mut rng = VizRng::from_seed(seed);
        let trace = generate_trace_with(&values, &mut rng);
        prop_assert!(trace.last().all_sorted());
        prop_assert_eq!(trace.last().description.as_str(), "Array is fully sorted");
    }

    #[test]
    fn prop_initial_step_survives_the_run(values in arb_input(), seed in any::<u64>()) {
        let mut rng = VizRng::from_seed(seed);
        let trace = generate_trace_with(&values, &mut rng);
        // The initial snapshot still shows the original order and statuses
        // after the working array has been fully sorted.
        prop_assert_eq!(trace.first().values(), values);
        prop_assert!(trace
            .first()
            .array
            .iter()
            .all(|e| e.status == ElementStatus::Unsorted));
        prop_assert_eq!(trace.first().description.as_str(), "Initial array");
    }

    #[test]
    fn prop_seeded_runs_reproduce(values in arb_input(), seed in any::<u64>()) {
        let mut rng1 = VizRng::from_seed(seed);
        let mut rng2 = VizRng::from_seed(seed);
        prop_assert_eq!(
            generate_trace_with(&values, &mut rng1),
            generate_trace_with(&values, &mut rng2)
        );
    }
}

#[test]
fn concrete_three_element_trace() {
    // Regardless of pivot choices, [3, 1, 2] starts unsorted and ends fully
    // sorted as [1, 2, 3].
    for seed in 0..64 {
        let mut rng = VizRng::from_seed(seed);
        let trace = generate_trace_with(&[3.0, 1.0, 2.0], &mut rng);

        assert_eq!(trace.first().values(), vec![3.0, 1.0, 2.0]);
        assert!(trace
            .first()
            .array
            .iter()
            .all(|e| e.status == ElementStatus::Unsorted));

        assert_eq!(trace.last().values(), vec![1.0, 2.0, 3.0]);
        assert!(trace.last().all_sorted());
    }
}

#[test]
fn entropy_runs_are_valid_sorts() {
    // Unseeded traces differ in pivot content run to run, but every one of
    // them sorts correctly.
    let input = [9.0, 4.0, 7.0, 1.0, 8.0, 2.0];
    for _ in 0..16 {
        let trace = generate_trace(&input);
        assert_eq!(trace.last().values(), vec![1.0, 2.0, 4.0, 7.0, 8.0, 9.0]);
        assert!(trace.last().all_sorted());
    }
}

#[test]
fn scripted_trace_serialises_for_playback() {
    let mut source = ScriptedSource::new(vec![0.0]);
    let trace = generate_trace_with(&[2.0, 1.0], &mut source);

    let json = serde_json::to_string(&trace).expect("trace serialises");
    assert!(json.contains("\"Initial array\""));
    assert!(json.contains("\"pivot\""));

    let back: viz_core::types::Trace = serde_json::from_str(&json).expect("trace deserialises");
    assert_eq!(back, trace);
}
