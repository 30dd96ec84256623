//! Criterion comparison of the naive and blocked multipliers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mb_matrix::{BlockedMultiplier, Matrix, Multiplier, NaiveMultiplier};

fn patterned(n: usize) -> Matrix {
    let data: Vec<f64> = (0..n * n).map(|i| (i % 100) as f64).collect();
    Matrix::new(data, n)
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[64usize, 256, 512] {
        let a = patterned(n);
        let b = patterned(n);

        let naive = NaiveMultiplier::new();
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, _| {
            bench.iter(|| naive.multiply(black_box(&a), black_box(&b)).unwrap());
        });

        for &tile in &[8usize, 16, 32] {
            let blocked = BlockedMultiplier::new(tile);
            group.bench_with_input(
                BenchmarkId::new(format!("blocked_{}", tile), n),
                &n,
                |bench, _| {
                    bench.iter(|| blocked.multiply(black_box(&a), black_box(&b)).unwrap());
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
