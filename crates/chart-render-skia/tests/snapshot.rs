// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic two-series area chart to PNG bytes (no text).
// - Always: two renders decode to identical pixels, and both series colors are present.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; only the checks above apply until the golden file is blessed.

use chart_core::{Chart, ChartConfig, Rgba, Series};
use chart_render_skia::{RenderOptions, SkiaRenderer};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::with_config("snapshot", ChartConfig::new(400.0, 200.0).with_padding(40.0).with_area(true));
    chart.add_series(Series::from_pairs(
        "Enabled",
        Rgba::rgb(0x10, 0xb9, 0x81),
        [("d1", 0.0), ("d2", 12.0), ("d3", 7.0), ("d4", 20.0), ("d5", 16.0)],
    ));
    chart.add_series(Series::from_pairs(
        "Disabled",
        Rgba::rgb(0xef, 0x44, 0x44),
        [("d1", 18.0), ("d2", 9.0), ("d3", 11.0), ("d4", 3.0), ("d5", 4.0)],
    ));
    let renderer = SkiaRenderer::new(RenderOptions { draw_labels: false, ..Default::default() });
    renderer.render_chart(&chart).expect("render")
}

fn has_pixel(img: &image::RgbaImage, rgb: [u8; 3]) -> bool {
    img.pixels().any(|p| p.0[..3] == rgb)
}

#[test]
fn rendering_is_deterministic_and_draws_both_series() {
    let first = image::load_from_memory(&render_bytes()).expect("decode first").to_rgba8();
    let second = image::load_from_memory(&render_bytes()).expect("decode second").to_rgba8();
    assert_eq!((first.width(), first.height()), (400, 200));
    assert_eq!(first.as_raw(), second.as_raw(), "two renders of the same chart differ");
    // Marker centers are solid series color.
    assert!(has_pixel(&first, [0x10, 0xb9, 0x81]), "Enabled color missing");
    assert!(has_pixel(&first, [0xef, 0x44, 0x44]), "Disabled color missing");
}

#[test]
fn golden_rollout_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("rollout_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
