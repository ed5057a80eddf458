// File: crates/chart-core/benches/layout_bench.rs
// Summary: Criterion bench for the layout pass over two series of growing length.

use chart_core::{layout, ChartConfig, Rgba, Series};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_series(name: &str, n: usize, phase: f64) -> Series {
    Series::from_pairs(
        name,
        Rgba::BLUE,
        (0..n).map(|i| (format!("d{i}"), ((i as f64) * 0.05 + phase).sin() * 100.0 + 200.0)),
    )
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = ChartConfig::default().with_area(true);
    for &n in &[30usize, 365, 5_000] {
        let series = vec![gen_series("enabled", n, 0.0), gen_series("disabled", n, 1.3)];
        group.bench_with_input(BenchmarkId::from_parameter(format!("2x{n}")), &series, |b, s| {
            b.iter(|| black_box(layout(s, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
