use adtkit::MinHeap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_insert(c: &mut Criterion) {
    let xs: Vec<u64> = lcg(1).take(10_000).collect();
    c.bench_function("min_heap_insert_10k", |b| {
        b.iter_batched(
            || xs.clone(),
            |xs| black_box(MinHeap::from(xs)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_drain(c: &mut Criterion) {
    let heap: MinHeap<u64> = lcg(2).take(10_000).collect();
    c.bench_function("min_heap_drain_10k", |b| {
        b.iter_batched(
            || heap.clone(),
            |mut h| {
                while let Some(x) = h.extract_min() {
                    black_box(x);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_push_pop_steady(c: &mut Criterion) {
    let mut heap: MinHeap<u64> = lcg(3).take(1_000).collect();
    let mut src = lcg(4);
    c.bench_function("min_heap_push_pop_1k", |b| {
        b.iter(|| {
            heap.insert(src.next().unwrap());
            black_box(heap.extract_min());
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_drain, bench_push_pop_steady
}
criterion_main!(benches);
