use hadron_cg::{calculate_coefficient, ClebschGordanCache};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn cg_bench(c: &mut Criterion) {
    let keys: Vec<_> = (0..=6)
        .flat_map(|j| [(j, 2, j, 0, 0), (j, 1, j + 1, j, 1), (j, j, 2 * j, j, -j)])
        .collect();

    c.bench_function("cg_analytic", |b| {
        b.iter(|| {
            for &(ja, jb, jc, ma, mb) in &keys {
                black_box(calculate_coefficient(ja, jb, jc, ma, mb, ma + mb).unwrap());
            }
        });
    });

    let cache = ClebschGordanCache::warmed();
    c.bench_function("cg_cached", |b| {
        b.iter(|| {
            for &(ja, jb, jc, ma, mb) in &keys {
                black_box(cache.coefficient(ja, jb, jc, ma, mb, ma + mb).unwrap());
            }
        });
    });
}

criterion_group!(benches, cg_bench);
criterion_main!(benches);
