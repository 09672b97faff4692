//! Property tests for the Monte Carlo sampler.
//!
//! For every valid configuration:
//!
//! 1. `0 <= probability <= 1` and `success_count <= total_trials`
//! 2. `durations` has exactly `n_trials` entries
//! 3. every trial duration lies within the combined task range
//! 4. `success_count` agrees with a recount of `durations` vs threshold

use proptest::prelude::*;
use viz_core::types::Task;
use viz_sampler::{Sampler, SamplerConfig, MAX_TRIALS, MIN_TRIALS};

/// A well-formed duration range: 0 <= min <= max.
fn arb_range() -> impl Strategy<Value = (f64, f64)> {
    (0.0..10.0f64, 0.0..10.0f64).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_result_is_consistent(
        (a_min, a_max) in arb_range(),
        (b_min, b_max) in arb_range(),
        hours in 0.1..30.0f64,
        n_trials in MIN_TRIALS..=MAX_TRIALS / 10,
        seed in any::<u64>(),
    ) {
        let config = SamplerConfig::builder()
            .task_a(Task::new("A", a_min, a_max))
            .task_b(Task::new("B", b_min, b_max))
            .available_hours(hours)
            .n_trials(n_trials)
            .seed(seed)
            .build()
            .unwrap();

        let mut sampler = Sampler::new(config).unwrap();
        let result = sampler.run();

        prop_assert_eq!(result.total_trials, n_trials);
        prop_assert_eq!(result.durations.len(), n_trials);
        prop_assert!(result.success_count <= result.total_trials);
        prop_assert!((0.0..=1.0).contains(&result.probability));
        prop_assert_eq!(result.threshold, hours);

        let recount = result.durations.iter().filter(|&&d| d <= hours).count();
        prop_assert_eq!(result.success_count, recount);

        let lo = a_min + b_min;
        let hi = a_max + b_max;
        for &duration in &result.durations {
            prop_assert!(duration >= lo - 1e-12 && duration <= hi + 1e-12);
        }
    }
}
