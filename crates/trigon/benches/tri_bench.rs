//! Criterion benchmarks for triangle evaluation and sampling.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use trigon::tri::rand::{draw_many, draw_triangle, ReplayToken, SampleCfg};
use trigon::tri::TriCfg;

fn bench_tri(c: &mut Criterion) {
    let mut group = c.benchmark_group("tri");
    let cfg = TriCfg::default();
    group.bench_function("report_single", |b| {
        let t = draw_triangle(SampleCfg::default(), ReplayToken { seed: 1, index: 0 });
        b.iter(|| t.report(&cfg))
    });
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("draw_many", n), &n, |b, &n| {
            b.iter(|| draw_many(SampleCfg::default(), 7, n))
        });
        group.bench_with_input(BenchmarkId::new("report_batch", n), &n, |b, &n| {
            b.iter_batched(
                || draw_many(SampleCfg::default(), 11, n),
                |ts| {
                    let _reports: Vec<_> = ts.iter().map(|t| t.report(&cfg)).collect();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tri);
criterion_main!(benches);
