// File: crates/flag-metrics/tests/metrics.rs
// Purpose: Metrics JSON shape, totals, and chart series shaping.

use chart_core::{ChartConfig, ChartLayout};
use flag_metrics::metrics::{DISABLED_COLOR, ENABLED_COLOR};
use flag_metrics::{FeatureMetrics, TimeRange};

fn sample() -> FeatureMetrics {
    serde_json::from_str(
        r#"{
            "featureName": "checkout-v2",
            "enabledAxis": [
                {"label": "2025-01-01", "value": 10},
                {"label": "2025-01-02", "value": 30},
                {"label": "2025-01-03", "value": 50}
            ],
            "disabledAxis": [
                {"label": "2025-01-01", "value": 40},
                {"label": "2025-01-02", "value": 20},
                {"label": "2025-01-03", "value": 5}
            ]
        }"#,
    )
    .expect("parse metrics")
}

#[test]
fn totals_sum_each_axis() {
    let m = sample();
    assert_eq!(m.enabled_total(), 90.0);
    assert_eq!(m.disabled_total(), 65.0);
}

#[test]
fn series_are_enabled_then_disabled() {
    let series = sample().to_series();
    assert_eq!(series.len(), 2);
    assert_eq!((series[0].name.as_str(), series[0].color), ("Enabled", ENABLED_COLOR));
    assert_eq!((series[1].name.as_str(), series[1].color), ("Disabled", DISABLED_COLOR));
    assert_eq!(series[0].points[1].label, "2025-01-02");
    assert_eq!(series[1].points[2].value, 5.0);
    assert_eq!(ENABLED_COLOR.to_hex(), "#10b981");
}

#[test]
fn missing_axes_yield_no_data_chart() {
    let m: FeatureMetrics = serde_json::from_str(r#"{"featureName":"idle"}"#).unwrap();
    assert_eq!(m.enabled_total(), 0.0);
    let chart = m.to_chart(ChartConfig::default());
    assert_eq!(chart.title, "idle");
    assert!(chart.layout().is_no_data());
}

#[test]
fn chart_uses_union_domain() {
    let chart = sample().to_chart(ChartConfig::new(300.0, 200.0).with_padding(40.0));
    let ChartLayout::Plotted(g) = chart.layout() else { panic!("expected geometry") };
    assert_eq!((g.domain.min, g.domain.max), (5.0, 50.0));
    assert_eq!(g.hit_regions.len(), 6);
}

#[test]
fn time_range_parses_and_prints() {
    assert_eq!("Week".parse::<TimeRange>(), Ok(TimeRange::Week));
    assert!("month".parse::<TimeRange>().is_err());
    assert_eq!(TimeRange::Day.to_string(), "day");
    assert_eq!(serde_json::to_string(&TimeRange::Week).unwrap(), "\"week\"");
}
