//! Criterion benchmarks for tangle factorization.
//! Focus sizes: N in {4, 8, 16, 32}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p brauer

use brauer::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("random_tangle", n), &n, |b, &n| {
            let mut tok = ReplayToken::new(43, 0);
            b.iter_batched(
                || {
                    tok.index = tok.index.wrapping_add(1);
                    random_tangle(n, tok).unwrap()
                },
                |t| {
                    let _f = factorize_bn(t, FactorizeCfg { validate_crossings: false }).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("from_text", n), &n, |b, &n| {
            let text = random_tangle(n, ReplayToken::new(44, 0)).unwrap().to_string();
            b.iter(|| {
                let _t: Tangle = text.parse().unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("evaluate_word", n), &n, |b, &n| {
            let word = random_word(n, 4 * n, ReplayToken::new(45, 0));
            b.iter(|| {
                let _t = word.evaluate(n).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_factorize);
criterion_main!(benches);
