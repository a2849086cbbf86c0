//! Criterion benchmarks for CM sketch insertion, flush and query.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statsketch::cm::CmSketch;

const QUANTILES: [f64; 3] = [0.5, 0.95, 0.99];

fn random_values(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(1972);
    (0..n).map(|_| rng.random_range(0.0..10_000.0)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("cm/insert_flush");

    for n in [100usize, 1_000, 10_000, 100_000] {
        let values = random_values(n);
        group.bench_with_input(BenchmarkId::new("random", n), &values, |b, values| {
            b.iter(|| {
                let mut cm = CmSketch::new(0.01, &QUANTILES).unwrap();
                for v in values {
                    cm.add_sample(black_box(*v));
                }
                cm.flush();
                black_box(cm.len());
            })
        });

        group.bench_with_input(BenchmarkId::new("ascending", n), &n, |b, n| {
            b.iter(|| {
                let mut cm = CmSketch::new(0.01, &QUANTILES).unwrap();
                for v in 0..*n {
                    cm.add_sample(black_box(v as f64));
                }
                cm.flush();
                black_box(cm.len());
            })
        });
    }

    group.finish();
}

fn bench_eps(c: &mut Criterion) {
    let mut group = c.benchmark_group("cm/eps");
    let values = random_values(10_000);

    for eps in [0.001, 0.01, 0.1] {
        group.bench_with_input(BenchmarkId::from_parameter(eps), &eps, |b, eps| {
            b.iter(|| {
                let mut cm = CmSketch::new(*eps, &QUANTILES).unwrap();
                for v in &values {
                    cm.add_sample(*v);
                }
                cm.flush();
                black_box(cm.len());
            })
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut cm = CmSketch::new(0.01, &QUANTILES).unwrap();
    for v in random_values(100_000) {
        cm.add_sample(v);
    }
    cm.flush();

    c.bench_function("cm/query_p99", |b| {
        b.iter(|| black_box(cm.query(black_box(0.99))))
    });
}

criterion_group!(benches, bench_insert, bench_eps, bench_query);
criterion_main!(benches);
