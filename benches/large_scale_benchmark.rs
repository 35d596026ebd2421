use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use quantsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Uniform Integers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60)); // Large inputs need a longer window

    // Dataset generation
    let mut rng = StdRng::seed_from_u64(42);
    let count = 1_000_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random_range(0..1_000_000)).collect();

    group.throughput(Throughput::Elements(count as u64));

    let sequential = QuantSorter::default();
    let parallel = QuantSorter::new(SortConfig::default().with_parallel(true))
        .expect("default parallel config is valid");

    group.bench_function("quantsort (sequential)", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter_batched(
            || input.clone(),
            |data| sequential.sort_vec(black_box(data), &mut rng),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("quantsort (parallel buckets)", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter_batched(
            || input.clone(),
            |data| parallel.sort_vec(black_box(data), &mut rng),
            BatchSize::LargeInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_uniform);
criterion_main!(benches);
