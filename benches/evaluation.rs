use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;
use std::hint::black_box;
use vismodels::prelude::*;

fn coordinates(n: usize) -> (Array1<f64>, Array1<f64>) {
    (
        Array1::linspace(-2.0, 2.0, n),
        Array1::linspace(1.5, -1.5, n),
    )
}

fn nested_tree(
) -> Convolution<Sum<Sum<Gaussian, Scaled<Gaussian>>, Scaled<Point>>, Gaussian> {
    let core = stretched_gaussian(0.3, 0.5).unwrap();
    let halo = scale(stretched_gaussian(2.0, 2.0).unwrap(), 0.2);
    let star = scale(Point::unit(), 0.8);
    smoothed(core + halo + star, 0.1).unwrap()
}

fn visibilities_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analytic visibilities");

    let single = Gaussian::unit();
    let tree = nested_tree();
    let serial = AnalyticOnly::new(Executor::Serial);
    let threaded = AnalyticOnly::new(Executor::Threaded);

    for n in [1_000, 100_000] {
        let (u, v) = coordinates(n);

        group.bench_with_input(BenchmarkId::new("Gaussian serial", n), &(&u, &v), |b, (u, v)| {
            b.iter(|| black_box(visibilities(&single, u.view(), v.view(), &serial).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("Nested serial", n), &(&u, &v), |b, (u, v)| {
            b.iter(|| black_box(visibilities(&tree, u.view(), v.view(), &serial).unwrap()))
        });
        group.bench_with_input(
            BenchmarkId::new("Nested threaded", n),
            &(&u, &v),
            |b, (u, v)| {
                b.iter(|| black_box(visibilities(&tree, u.view(), v.view(), &threaded).unwrap()))
            },
        );
    }

    group.finish();
}

fn image_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analytic images");

    let model = stretched_gaussian(0.3, 0.5).unwrap() + scale(Gaussian::unit(), 0.2);
    let grid = GridSpec::square(10.0, 256).unwrap();

    for executor in [Executor::Serial, Executor::Threaded] {
        let engine = AnalyticOnly::new(executor);
        group.bench_with_input(
            BenchmarkId::new("Sum intensitymap", format!("{executor:?}")),
            &grid,
            |b, grid| b.iter(|| black_box(intensitymap(&model, grid, &engine).unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("Sum fouriermap", format!("{executor:?}")),
            &grid,
            |b, grid| b.iter(|| black_box(fouriermap(&model, grid, &engine).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, visibilities_benchmark, image_benchmark);
criterion_main!(benches);
