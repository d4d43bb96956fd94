#[path = "../tests/common/mod.rs"]
mod common;

use common::{random_dense, random_sparse};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use edge_overlap::{monte_carlo, permutation_test, Adjacency, MonteCarloConfig, Permutation};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TRIALS: usize = 1_000;

fn bench_overlap_permuted(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_permuted");
    for &n in &[50usize, 200, 800] {
        let m = 2 * n;
        let da = random_dense(1, n, m);
        let db = random_dense(2, n, m);
        let sa = random_sparse(1, n, m);
        let sb = random_sparse(2, n, m);
        let p = Permutation::random(n, &mut ChaCha8Rng::seed_from_u64(3));

        group.bench_with_input(BenchmarkId::new("dense", n), &p, |b, p| {
            b.iter(|| da.overlap_permuted(&db, p))
        });
        group.bench_with_input(BenchmarkId::new("dense_materialized", n), &p, |b, p| {
            b.iter(|| da.overlap(&db.permuted(p)))
        });
        group.bench_with_input(BenchmarkId::new("sparse", n), &p, |b, p| {
            b.iter(|| sa.overlap_permuted(&sb, p))
        });
    }
    group.finish();
}

fn bench_monte_carlo_single_stream(c: &mut Criterion) {
    let a = random_sparse(10, 300, 600);
    let b = random_sparse(11, 300, 600);
    c.bench_function("monte_carlo/sparse_300/1000", move |bench| {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        bench.iter(|| monte_carlo(&a, &b, TRIALS, &mut rng).unwrap())
    });
}

fn bench_permutation_test_sharded(c: &mut Criterion) {
    let a = random_sparse(20, 300, 600);
    let b = random_sparse(21, 300, 600);
    let config = MonteCarloConfig::new(TRIALS).with_seed(0);
    c.bench_function("permutation_test/sparse_300/1000", move |bench| {
        bench.iter(|| permutation_test(&a, &b, &config).unwrap())
    });
}

criterion_group!(
    benches,
    bench_overlap_permuted,
    bench_monte_carlo_single_stream,
    bench_permutation_test_sharded
);
criterion_main!(benches);
