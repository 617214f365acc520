use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ordered_collections::{Config, OrderedMap};
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

fn filled(n: usize, seed: u64) -> (OrderedMap<String, u64>, Vec<String>) {
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    let m = keys
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, k)| (k, i as u64))
        .collect();
    (m, keys)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("ordered_map_insert_10k", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut m = OrderedMap::new();
                for (i, k) in keys.into_iter().enumerate() {
                    m.insert(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("ordered_map_get_hit", |b| {
        let (m, keys) = filled(20_000, 7);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("ordered_map_get_miss", |b| {
        let (m, _) = filled(10_000, 11);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

// Remove then reinsert the oldest key: every step leaves one dead slot,
// so this measures the amortized compaction cost per threshold.
fn bench_churn(c: &mut Criterion) {
    for theta in [0.0, 0.25, 1.0] {
        c.bench_function(&format!("ordered_map_churn_theta_{theta}"), |b| {
            let keys: Vec<_> = lcg(3).take(10_000).map(key).collect();
            let mut m = OrderedMap::with_config(Config::new(theta).unwrap());
            for (i, k) in keys.iter().cloned().enumerate() {
                m.insert(k, i as u64);
            }
            b.iter(|| {
                let k = m.first().map(|(k, _)| k.clone()).unwrap();
                let v = m.remove(&k).unwrap();
                m.insert(k, v);
            })
        });
    }
}

fn bench_iter_after_deletes(c: &mut Criterion) {
    c.bench_function("ordered_map_iter_after_deletes", |b| {
        let (mut m, keys) = filled(10_000, 5);
        for k in keys.iter().step_by(3) {
            m.remove(k);
        }
        b.iter(|| black_box(m.values().sum::<u64>()))
    });
}

fn bench_pop(c: &mut Criterion) {
    c.bench_function("ordered_map_pop_all_10k", |b| {
        b.iter_batched(
            || filled(10_000, 9).0,
            |mut m| {
                while let Ok(pair) = m.pop() {
                    black_box(pair);
                }
            },
            BatchSize::SmallInput,
        )
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
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_churn, bench_iter_after_deletes, bench_pop
}
criterion_main!(benches);
