// File: crates/chart-render-skia/benches/render_bench.rs
// Summary: Criterion bench for raster rendering of a two-series chart.

use chart_core::{Chart, ChartConfig, Rgba, Series};
use chart_render_skia::{RenderOptions, SkiaRenderer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn make_chart(n: usize, area: bool) -> Chart {
    let mut chart = Chart::with_config("bench", ChartConfig::default().with_area(area));
    let mut enabled = Series::new("Enabled", Rgba::rgb(0x10, 0xb9, 0x81));
    let mut disabled = Series::new("Disabled", Rgba::rgb(0xef, 0x44, 0x44));
    for i in 0..n {
        let t = i as f64 * 0.05;
        enabled.push(format!("d{i}"), 100.0 + 40.0 * t.sin());
        disabled.push(format!("d{i}"), 60.0 + 25.0 * t.cos());
    }
    chart.add_series(enabled);
    chart.add_series(disabled);
    chart
}

fn bench_render(c: &mut Criterion) {
    let renderer = SkiaRenderer::new(RenderOptions { draw_labels: false, ..Default::default() });
    let mut group = c.benchmark_group("render_png");
    for &n in &[30usize, 365] {
        for area in [false, true] {
            let chart = make_chart(n, area);
            let id = BenchmarkId::new(if area { "area" } else { "line" }, n);
            group.bench_with_input(id, &chart, |b, chart| {
                b.iter(|| renderer.render_chart(black_box(chart)).expect("render"));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
