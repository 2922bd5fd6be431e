//! Benchmarks for the normalization operators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mcda_core::prelude::{norm, Axis, Matrix, NormMethod, Normalizer};

fn decision_matrix(size: usize) -> Matrix<f64> {
    let data: Vec<f64> = (0..size * 8).map(|i| ((i * 37) % 101) as f64 + 1.0).collect();
    Matrix::from_vec(size, 8, data).expect("valid dimensions")
}

fn bench_methods_by_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_columns");
    let x = decision_matrix(500);

    for method in NormMethod::ALL {
        let normalizer = Normalizer::new(method).with_axis(Some(Axis::Columns));
        group.bench_with_input(BenchmarkId::from_parameter(method), &x, |b, x| {
            b.iter(|| normalizer.apply(black_box(x)));
        });
    }

    group.finish();
}

fn bench_sum_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_by_size");

    for size in [10, 100, 1000, 10000].iter() {
        let x = decision_matrix(*size);
        let axes = [
            ("none", None),
            ("rows", Some(Axis::Rows)),
            ("columns", Some(Axis::Columns)),
        ];
        for (label, axis) in axes {
            group.bench_with_input(BenchmarkId::new(label, size), &x, |b, x| {
                b.iter(|| norm::sum(black_box(x), axis));
            });
        }
    }

    group.finish();
}

fn bench_push_negatives_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_negatives_i64");

    for size in [10, 100, 1000].iter() {
        let data: Vec<i64> = (0..size * 8).map(|i| (i as i64 % 41) - 20).collect();
        let x = Matrix::from_vec(*size, 8, data).expect("valid dimensions");

        group.bench_with_input(BenchmarkId::from_parameter(size), &x, |b, x| {
            b.iter(|| norm::push_negatives(black_box(x), Some(Axis::Columns)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_methods_by_column, bench_sum_by_size, bench_push_negatives_int);
criterion_main!(benches);
