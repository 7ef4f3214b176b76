//! Criterion benchmarks for lookback pricing.
//!
//! Benchmarks cover:
//! - RNG performance
//! - Monte Carlo pricing with varying path and step counts
//! - Pathwise delta and vega
//! - Full Greeks (pathwise pass plus seven bumped reruns)
//! - Closed-form oracle

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_lookback::analytical::{discrete_monitoring_price, exact_price};
use pricer_lookback::greeks::{FiniteDifferenceGreeks, GreeksBumps, PathwiseEstimator};
use pricer_lookback::mc::{LookbackParams, MonteCarloPricer};
use pricer_lookback::path_dependent::LookbackVariant;
use pricer_lookback::rng::PricerRng;

fn params(n_paths: usize, n_steps: usize) -> LookbackParams {
    LookbackParams {
        n_paths,
        n_steps,
        ..LookbackParams::default()
    }
}

/// Benchmark RNG generation.
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_normal();
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark Monte Carlo pricing with varying path counts.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(20);

    for n_paths in [1_000, 10_000] {
        let pricer = MonteCarloPricer::new(params(n_paths, 252)).unwrap();
        group.bench_with_input(BenchmarkId::new("paths", n_paths), &pricer, |b, pricer| {
            b.iter(|| black_box(pricer.price(black_box(42))));
        });
    }

    for n_steps in [12, 52, 252] {
        let pricer = MonteCarloPricer::new(params(5_000, n_steps)).unwrap();
        group.bench_with_input(BenchmarkId::new("steps", n_steps), &pricer, |b, pricer| {
            b.iter(|| black_box(pricer.price(black_box(42))));
        });
    }

    group.finish();
}

/// Benchmark the pathwise pass against a plain pricing run.
fn bench_pathwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathwise");
    group.sample_size(20);

    let p = params(10_000, 252);
    let pricer = MonteCarloPricer::new(p).unwrap();
    let estimator = PathwiseEstimator::new(p).unwrap();

    group.bench_function("price_only", |b| b.iter(|| black_box(pricer.price(42))));
    group.bench_function("price_delta_vega", |b| {
        b.iter(|| black_box(estimator.estimate(42)))
    });

    group.finish();
}

/// Benchmark full Greeks computation.
fn bench_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");
    group.sample_size(10);

    for variant in [LookbackVariant::Call, LookbackVariant::Put] {
        let p = LookbackParams {
            variant,
            ..params(5_000, 252)
        };
        let calculator = FiniteDifferenceGreeks::new(p, GreeksBumps::default()).unwrap();
        group.bench_function(format!("{:?}", variant), |b| {
            b.iter(|| black_box(calculator.compute(42)))
        });
    }

    group.finish();
}

/// Benchmark the closed forms.
fn bench_analytical(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytical");

    group.bench_function("continuous", |b| {
        b.iter(|| {
            black_box(exact_price(
                black_box(100.0),
                black_box(100.0),
                0.05,
                0.2,
                1.0,
                LookbackVariant::Call,
            ))
        })
    });
    group.bench_function("discrete", |b| {
        b.iter(|| {
            black_box(discrete_monitoring_price(
                black_box(100.0),
                0.05,
                0.2,
                1.0,
                252,
                LookbackVariant::Put,
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_mc_pricing,
    bench_pathwise,
    bench_greeks,
    bench_analytical
);
criterion_main!(benches);
