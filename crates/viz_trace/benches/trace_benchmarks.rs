//! Criterion benchmarks for the trace engine.
//!
//! Measures trace generation across input sizes to characterise scaling
//! behaviour. Step emission deep-copies the array per step, so the trace
//! cost is O(n) per step on top of the expected O(n log n) step count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use viz_core::rng::VizRng;
use viz_trace::generate_trace_with;

/// Generate a deterministic shuffled input of the given size.
fn generate_input(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7919) % n) as f64).collect()
}

/// Benchmark trace generation across input sizes.
fn bench_generate_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_trace");

    for size in [10, 100, 1000] {
        let input = generate_input(size);

        group.bench_with_input(BenchmarkId::new("seeded", size), &input, |b, input| {
            b.iter(|| {
                let mut rng = VizRng::from_seed(42);
                generate_trace_with(black_box(input), &mut rng)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_trace);
criterion_main!(benches);
