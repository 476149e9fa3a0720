use analiza_math::iterative::{gauss_seidel_solve, jacobi_solve};
use analiza_math::linalg::{condition_number, matrix_inverse};
use analiza_types::config::IterativeConfig;
use analiza_types::progress::NoopObserver;
use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use std::hint::black_box;

fn dominant_system(n: usize) -> (Array2<f64>, Vec<f64>) {
    let mut a = Array2::from_shape_fn((n, n), |(i, j)| ((i * 7 + j * 13) as f64).sin());
    for i in 0..n {
        let off: f64 = (0..n).filter(|&j| j != i).map(|j| a[[i, j]].abs()).sum();
        a[[i, i]] = off + 1.0;
    }
    let b = (0..n).map(|i| i as f64).collect();
    (a, b)
}

fn bench_jacobi_vs_gauss_seidel(c: &mut Criterion) {
    let (a, b) = dominant_system(32);
    let guess = vec![0.0; 32];
    let cfg = IterativeConfig::with_tolerance(1e-10);

    let mut group = c.benchmark_group("iterative_32x32");
    group.bench_function("jacobi", |bench| {
        bench.iter(|| black_box(jacobi_solve(&a, &b, &guess, &cfg, &mut NoopObserver)))
    });
    group.bench_function("gauss_seidel", |bench| {
        bench.iter(|| black_box(gauss_seidel_solve(&a, &b, &guess, &cfg, &mut NoopObserver)))
    });
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let (a, _) = dominant_system(16);
    c.bench_function("matrix_inverse_16x16", |bench| {
        bench.iter(|| black_box(matrix_inverse(&a, &mut NoopObserver)))
    });
    c.bench_function("condition_number_16x16", |bench| {
        bench.iter(|| black_box(condition_number(&a)))
    });
}

criterion_group!(benches, bench_jacobi_vs_gauss_seidel, bench_inverse);
criterion_main!(benches);
