//! ROC/AUC benchmarks
//!
//! Sorting dominates: O(N log N) for the points, O(N) for integration.
//!
//! Run with: cargo bench --bench auc

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sdt_roc::experiment::Experiment;
use sdt_roc::Measurement;

const SIZES: [u64; 3] = [10, 1_000, 100_000];

fn build_experiment(n: u64) -> Experiment {
    let mut experiment = Experiment::new();
    // Deterministic spread of (F, H) points, inserted out of order
    for i in 0..n {
        let j = (i * 7919) % n;
        experiment.add_condition(Measurement::new(n + j, n - j, j, n - j), None);
    }
    experiment
}

fn bench_compute_auc(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_auc");

    for n in SIZES {
        let experiment = build_experiment(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &experiment, |b, exp| {
            b.iter(|| black_box(exp).compute_auc());
        });
    }

    group.finish();
}

fn bench_sorted_roc_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_roc_points");

    for n in SIZES {
        let experiment = build_experiment(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &experiment, |b, exp| {
            b.iter(|| black_box(exp).sorted_roc_points());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_auc, bench_sorted_roc_points);
criterion_main!(benches);
