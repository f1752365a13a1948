use crate::common::{configure_criterion, wrapped_pair};
use criterion::{criterion_group, BatchSize, BenchmarkId, Criterion};
use stack_rail::{merge_stacks, TracedError};
use std::hint::black_box;

pub fn bench_merge_stacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge/stacks");

    for (shared, unique) in [(8, 2), (32, 8), (60, 4)] {
        let pair = wrapped_pair(shared, unique);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{shared}+{unique}")),
            &pair,
            |b, pair| {
                b.iter_batched(
                    || pair.clone(),
                    |(mut outer, mut inner)| black_box(merge_stacks(&mut outer, &mut inner)),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

#[inline(never)]
fn inner_failure() -> TracedError<&'static str> {
    TracedError::new("row not found")
}

pub fn bench_wrap(c: &mut Criterion) {
    c.bench_function("merge/traced_error_wrap", |b| {
        b.iter(|| black_box(TracedError::wrap("loading user", inner_failure())))
    });
}

criterion_group! {
    name = merge_benches;
    config = configure_criterion();
    targets =
        bench_merge_stacks,
        bench_wrap,
}
