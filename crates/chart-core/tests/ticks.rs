// File: crates/chart-core/tests/ticks.rs
// Purpose: Value-axis ticks and x-axis category labels.

use chart_core::axis::{category_labels, label_step, short_date, value_ticks};
use chart_core::{Chart, ChartConfig, Domain, IndexScale, LinearScale, Rgba, Series};

#[test]
fn five_ticks_over_zero_to_hundred() {
    let domain = Domain::new(0.0, 100.0);
    let scale = LinearScale::vertical(0.0, 100.0, 60.0, 240.0);
    let ticks = value_ticks(&domain, &scale, 5);

    let values: Vec<f64> = ticks.iter().map(|t| t.display).collect();
    assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert!(ticks.windows(2).all(|w| w[1].y < w[0].y), "y decreases as value grows");
    assert_eq!(ticks[0].y, 240.0);
    assert_eq!(ticks[4].y, 60.0);
}

#[test]
fn label_count_below_two_is_treated_as_two() {
    let domain = Domain::new(0.0, 10.0);
    let scale = LinearScale::vertical(0.0, 10.0, 0.0, 100.0);
    assert_eq!(value_ticks(&domain, &scale, 1).len(), 2);
    assert_eq!(value_ticks(&domain, &scale, 0).len(), 2);
}

#[test]
fn display_is_rounded_but_position_is_not() {
    let domain = Domain::new(0.0, 10.0);
    let scale = LinearScale::vertical(0.0, 10.0, 0.0, 300.0);
    let ticks = value_ticks(&domain, &scale, 4);
    // 0, 3.33.., 6.66.., 10
    assert_eq!(ticks[1].display, 3.0);
    assert_eq!(ticks[2].display, 7.0);
    assert!((ticks[1].y - scale.to_px(10.0 / 3.0)).abs() < 1e-9);
    assert_eq!(ticks[1].text(), "3");
}

#[test]
fn default_chart_has_six_ticks() {
    let mut chart = Chart::new("ticks");
    chart.add_series(Series::from_pairs("s", Rgba::BLUE, [("a", 0.0), ("b", 50.0)]));
    let g = chart.layout().geometry().cloned().expect("geometry");
    assert_eq!(g.ticks.len(), 6);
    assert_eq!(g.ticks.first().map(|t| t.display), Some(0.0));
    assert_eq!(g.ticks.last().map(|t| t.display), Some(50.0));

    let mut small = Chart::with_config("small", ChartConfig::line_preset());
    small.add_series(Series::from_pairs("s", Rgba::BLUE, [("a", 0.0), ("b", 50.0)]));
    assert_eq!(small.layout().geometry().map(|g| g.ticks.len()), Some(5));
}

#[test]
fn category_labels_are_thinned_to_the_limit() {
    let labels: Vec<String> = (1..=20).map(|d| format!("2025-01-{d:02}")).collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let scale = IndexScale::new(60.0, 680.0, refs.len());

    let shown = category_labels(&refs, &scale, 8);
    // ceil(20 / 8) = 3 -> indices 0, 3, 6, ..., 18
    assert_eq!(label_step(20, 8), 3);
    assert_eq!(shown.iter().map(|l| l.index).collect::<Vec<_>>(), vec![0, 3, 6, 9, 12, 15, 18]);
    assert_eq!(shown[0].text, "01/01");
    assert_eq!(shown[1].text, "01/04");
    assert_eq!(shown[0].x, 60.0);
}

#[test]
fn short_labels_show_every_entry() {
    let refs = ["2025-02-01", "2025-02-02", "2025-02-03"];
    let scale = IndexScale::new(0.0, 100.0, 3);
    assert_eq!(category_labels(&refs, &scale, 8).len(), 3);
    assert!(category_labels(&[], &scale, 8).is_empty());
}

#[test]
fn short_date_formats() {
    assert_eq!(short_date("2025-01-02"), "01/02");
    assert_eq!(short_date("2025-W03-1"), "W03/1");
    assert_eq!(short_date("Mon"), "Mon");
}
