use adtkit::KeyedTable;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (KeyedTable<String, u64>, Vec<String>) {
    let mut t = KeyedTable::new();
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k.clone(), i as u64).unwrap();
    }
    (t, keys)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("keyed_table_insert_10k", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            || (KeyedTable::<String, u64>::new(), keys.clone()),
            |(mut t, keys)| {
                for (i, k) in keys.into_iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_search_hit(c: &mut Criterion) {
    c.bench_function("keyed_table_search_hit", |b| {
        let (t, keys) = filled(7, 10_000);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.search(k.as_str()));
        })
    });
}

// Misses walk the full probe bound, so they scale with capacity.
fn bench_search_miss(c: &mut Criterion) {
    c.bench_function("keyed_table_search_miss_1k", |b| {
        let (t, _) = filled(11, 1_000);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = key(miss.next().unwrap());
            black_box(t.search(k.as_str()));
        })
    });
}

fn bench_remove_reinsert(c: &mut Criterion) {
    c.bench_function("keyed_table_remove_reinsert", |b| {
        let (mut t, keys) = filled(13, 1_000);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            let (k, v) = t.remove(k.as_str()).unwrap();
            t.insert(k, v).unwrap();
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_search_hit, bench_search_miss, bench_remove_reinsert
}
criterion_main!(benches);
