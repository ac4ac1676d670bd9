use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use numeral::{ops, DenseMatrix, DenseVector, MatrixIndices, SparseMatrix, SparseVector};

const SIZES: [usize; 3] = [16, 64, 256];

/// Fraction of cells that are non-zero in sparse inputs
const DENSITY: f64 = 0.05;

fn random_values(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");
    let mut rng = StdRng::seed_from_u64(0);

    for len in SIZES.map(|n| n * n) {
        let left = DenseVector::from_vec(random_values(&mut rng, len));
        let right = DenseVector::from_vec(random_values(&mut rng, len));
        let sparse = SparseVector::zero(len)
            .with_entries((0..len).filter_map(|i| {
                rng.gen_bool(DENSITY).then(|| (i, rng.gen_range(-1.0..1.0)))
            }))
            .expect("indices are in range");

        group.bench_with_input(BenchmarkId::new("dense", len), &len, |b, _| {
            b.iter(|| ops::vector::dot(black_box(&left), black_box(&right)))
        });
        group.bench_with_input(BenchmarkId::new("dense_sparse", len), &len, |b, _| {
            b.iter(|| ops::vector::dot(black_box(&left), black_box(&sparse)))
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(20);
    let mut rng = StdRng::seed_from_u64(1);

    for n in SIZES.into_iter().take(2) {
        let left = DenseMatrix::from_vec(n, n, random_values(&mut rng, n * n)).expect("square");
        let right = DenseMatrix::from_vec(n, n, random_values(&mut rng, n * n)).expect("square");
        let mut sparse = SparseMatrix::<f64>::zero(n, n).expect("square");
        for row in 0..n {
            for col in 0..n {
                if rng.gen_bool(DENSITY) {
                    numeral::MatrixMut::set(
                        &mut sparse,
                        MatrixIndices::new(row, col),
                        rng.gen_range(-1.0..1.0),
                    )
                    .expect("in range");
                }
            }
        }

        let mut dense_out = DenseMatrix::<f64>::zero(n, n).expect("square");
        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, _| {
            b.iter(|| ops::matrix::multiply(black_box(&left), black_box(&right), &mut dense_out))
        });

        let mut sparse_out = SparseMatrix::<f64>::zero(n, n).expect("square");
        group.bench_with_input(BenchmarkId::new("sparse", n), &n, |b, _| {
            b.iter(|| ops::matrix::multiply(black_box(&sparse), black_box(&right), &mut sparse_out))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dot, bench_multiply);
criterion_main!(benches);
