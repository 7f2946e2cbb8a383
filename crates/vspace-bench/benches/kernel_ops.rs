//! Criterion micro-benchmarks for dense kernels.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use vspace_bench::{reference_len, stress_len, Workload};
use vspace_core::{ops, VectorSpace};

/// Benchmark: fill, norms and dot over 10K doubles.
fn bench_reductions_f64(c: &mut Criterion) {
    let w = Workload::<f64>::new(reference_len(), 42).unwrap();

    c.bench_function("fill_f64_10k", |b| {
        b.iter(|| w.space.fill(&w.dst, black_box(0.5)));
    });
    c.bench_function("norm2_f64_10k", |b| {
        b.iter(|| black_box(w.space.norm2(&w.x)));
    });
    c.bench_function("norm_inf_f64_10k", |b| {
        b.iter(|| black_box(w.space.norm_inf(&w.x)));
    });
    c.bench_function("dot_f64_10k", |b| {
        b.iter(|| black_box(w.space.dot(&w.x, &w.y)));
    });
}

/// Benchmark: the unit-coefficient fast path against the general path.
fn bench_axpby_paths_f64(c: &mut Criterion) {
    let w = Workload::<f64>::new(reference_len(), 7).unwrap();

    c.bench_function("axpby_unit_f64_10k", |b| {
        b.iter(|| w.space.axpby(&w.dst, 1.0, &w.x, -1.0, &w.y));
    });
    c.bench_function("axpby_general_f64_10k", |b| {
        b.iter(|| w.space.axpby(&w.dst, black_box(0.75), &w.x, black_box(-1.25), &w.y));
    });
    c.bench_function("axpbypcz_f64_10k", |b| {
        b.iter(|| {
            w.space
                .axpbypcz(&w.dst, 0.75, &w.x, -1.25, &w.y, 2.0, &w.z)
        });
    });
}

/// Benchmark: dispatcher overhead, in place, single precision.
fn bench_dispatch_f32(c: &mut Criterion) {
    let w = Workload::<f32>::new(reference_len(), 3).unwrap();

    c.bench_function("ops_axpby_in_place_f32_10k", |b| {
        b.iter(|| ops::axpby(&w.space, &w.dst, 0.5, &w.dst, 0.5, &w.x).unwrap());
    });
    c.bench_function("ops_scale_by_one_f32_10k", |b| {
        b.iter(|| ops::scale(&w.space, &w.dst, 1.0, &w.y).unwrap());
    });
}

/// Benchmark: 1M-element copy and swap.
fn bench_stress_f64(c: &mut Criterion) {
    let w = Workload::<f64>::new(stress_len(), 99).unwrap();

    c.bench_function("copy_f64_1m", |b| {
        b.iter(|| w.space.copy(&w.dst, &w.x));
    });
    c.bench_function("swap_f64_1m", |b| {
        b.iter(|| w.space.swap(&w.y, &w.z));
    });
}

criterion_group!(
    benches,
    bench_reductions_f64,
    bench_axpby_paths_f64,
    bench_dispatch_f32,
    bench_stress_f64
);
criterion_main!(benches);
