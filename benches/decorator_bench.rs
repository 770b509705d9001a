//! Benchmark for the function decorators.
//!
//! Measures the per-call overhead each wrapper adds on its hot path.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::decorator::{memoize, once};

fn fibonacci(n: u64) -> u64 {
    (0..n).fold((0_u64, 1_u64), |(current, next), _| (next, current.wrapping_add(next))).0
}

// =============================================================================
// Once Benchmarks
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let wrapper = once(fibonacci);
            black_box(*wrapper.call(black_box(50)))
        });
    });

    group.bench_function("replayed_call", |bencher| {
        let wrapper = once(fibonacci);
        wrapper.call(50);
        bencher.iter(|| black_box(*wrapper.call(black_box(50))));
    });

    group.finish();
}

// =============================================================================
// Memoize Benchmarks
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    group.bench_function("unwrapped", |bencher| {
        bencher.iter(|| black_box(fibonacci(black_box(80))));
    });

    group.bench_function("cache_hit", |bencher| {
        let fast = memoize(fibonacci);
        fast.call(80);
        bencher.iter(|| black_box(fast.call(black_box(80))));
    });

    for distinct in [10_u64, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("cache_fill", distinct),
            &distinct,
            |bencher, &distinct| {
                bencher.iter(|| {
                    let fast = memoize(fibonacci);
                    for n in 0..distinct {
                        black_box(fast.call(n));
                    }
                });
            },
        );
    }

    group.finish();
}

#[cfg(feature = "serde")]
fn benchmark_memoize_serialized(criterion: &mut Criterion) {
    use underbar::decorator::memoize_serialized;

    let mut group = criterion.benchmark_group("memoize_serialized");

    group.bench_function("cache_hit", |bencher| {
        let fast = memoize_serialized(|(name, n): (String, u64)| format!("{name}{}", fibonacci(n)));
        let _ = fast.call(("fib".to_string(), 80));
        bencher.iter(|| black_box(fast.call(("fib".to_string(), black_box(80)))));
    });

    group.finish();
}

#[cfg(not(feature = "serde"))]
fn benchmark_memoize_serialized(_criterion: &mut Criterion) {}

criterion_group!(benches, benchmark_once, benchmark_memoize, benchmark_memoize_serialized);
criterion_main!(benches);
