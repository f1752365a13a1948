use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use stack_rail::{capture, Stack, TracedError};
use std::hint::black_box;

#[inline(never)]
fn nested(depth: usize) -> Stack {
    if depth == 0 {
        capture(0)
    } else {
        black_box(nested(black_box(depth - 1)))
    }
}

pub fn bench_capture_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture/depth");

    for depth in [0, 16, 48, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(nested(depth)))
        });
    }
    group.finish();
}

pub fn bench_traced_error_creation(c: &mut Criterion) {
    c.bench_function("capture/traced_error_new", |b| {
        b.iter(|| black_box(TracedError::new("connection pool exhausted")))
    });

    c.bench_function("capture/traced_error_untraced", |b| {
        b.iter(|| black_box(TracedError::untraced("connection pool exhausted")))
    });
}

criterion_group! {
    name = capture_benches;
    config = configure_criterion();
    targets =
        bench_capture_depth,
        bench_traced_error_creation,
}
