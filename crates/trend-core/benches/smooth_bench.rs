use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use trend_core::cardinal_spline;

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        v.push((i as f64, y));
    }
    v
}

fn bench_cardinal_spline(c: &mut Criterion) {
    let mut group = c.benchmark_group("cardinal_spline");
    for &n in &[1_000usize, 10_000usize] {
        let data = gen_xy(n);
        for &samples in &[4usize, 16usize] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_s{samples}")),
                &samples,
                |b, &s| {
                    b.iter_batched(
                        || data.clone(),
                        |d| {
                            let _ = black_box(cardinal_spline(&d, 0.4, s));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_cardinal_spline);
criterion_main!(benches);
