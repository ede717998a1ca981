//! Criterion benchmarks for the full parameter-to-verdict pipeline.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pappus::incidence::construct_with_defaults;
use pappus::params::{draw_param, ParamCfg, ReplayToken};

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("incidence");
    let cfg = ParamCfg::default();
    let mut index = 0u64;
    group.bench_function("construct_with_defaults", |b| {
        b.iter_batched(
            || {
                index = index.wrapping_add(1);
                draw_param(cfg, ReplayToken { seed: 43, index })
            },
            construct_with_defaults,
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_construct);
criterion_main!(benches);
