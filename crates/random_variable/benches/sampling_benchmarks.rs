//! Benchmarks for random_variable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use random_variable::{Generator, RandomVariable, Samples, UnaryFn};

fn benchmark_leaf_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_outcome");

    let leaves = [
        ("bernoulli", RandomVariable::bernoulli(0.3).unwrap()),
        ("normal", RandomVariable::normal(0.0, 1.0).unwrap()),
        ("poisson_small", RandomVariable::poisson(4.0).unwrap()),
        ("poisson_large", RandomVariable::poisson(500.0).unwrap()),
        ("beta", RandomVariable::beta(2.0, 5.0).unwrap()),
    ];

    for (name, x) in leaves.iter() {
        let mut rng = Generator::from_seed(42);
        group.bench_function(*name, |b| b.iter(|| x.outcome_with(black_box(&mut rng))));
    }

    group.finish();
}

/// Builds `x + x + ... + x` with `depth` additions.
fn chained_sum(depth: usize) -> RandomVariable {
    let x = RandomVariable::continuous_uniform(0.0, 1.0).unwrap();
    (0..depth).fold(x.clone(), |acc, _| acc + &x)
}

fn benchmark_composite_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_depth");

    for depth in [1, 10, 100] {
        let z = chained_sum(depth).apply(UnaryFn::Exp);
        let mut rng = Generator::from_seed(7);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &z, |b, z| {
            b.iter(|| z.outcome_with(black_box(&mut rng)))
        });
    }

    group.finish();
}

fn benchmark_batch_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let z = RandomVariable::normal(0.0, 1.0).unwrap() * RandomVariable::exponential(1.0).unwrap();

    for n in [10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            let mut rng = Generator::from_seed(1);
            b.iter(|| z.outcomes_with(n, &mut rng))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, &n| {
            b.iter(|| z.par_outcomes(n, black_box(1)))
        });
    }

    group.finish();
}

fn benchmark_statistics(c: &mut Criterion) {
    let x = RandomVariable::normal(0.0, 1.0).unwrap();
    let samples: Samples = x
        .outcomes_with(100_000, &mut Generator::from_seed(3))
        .unwrap();

    c.bench_function("mean_100k", |b| b.iter(|| black_box(&samples).mean()));
    c.bench_function("median_100k", |b| b.iter(|| black_box(&samples).median()));
}

criterion_group!(
    benches,
    benchmark_leaf_sampling,
    benchmark_composite_depth,
    benchmark_batch_sequential_vs_parallel,
    benchmark_statistics
);
criterion_main!(benches);
