// File: crates/flag-metrics/src/metrics.rs
// Summary: Per-feature enabled/disabled evaluation counts and their chart shaping.

use std::fmt;
use std::str::FromStr;

use chart_core::{Chart, ChartConfig, DataPoint, Rgba, Series};
use serde::{Deserialize, Serialize};

pub const ENABLED_COLOR: Rgba = Rgba::rgb(0x10, 0xb9, 0x81);
pub const DISABLED_COLOR: Rgba = Rgba::rgb(0xef, 0x44, 0x44);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricDataPoint {
    pub value: f64,
    pub label: String,
}

impl From<&MetricDataPoint> for DataPoint {
    fn from(p: &MetricDataPoint) -> Self {
        DataPoint::new(p.label.clone(), p.value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureMetrics {
    pub feature_name: String,
    #[serde(default)]
    pub enabled_axis: Vec<MetricDataPoint>,
    #[serde(default)]
    pub disabled_axis: Vec<MetricDataPoint>,
}

impl FeatureMetrics {
    /// `Enabled` then `Disabled`, in that drawing order.
    pub fn to_series(&self) -> Vec<Series> {
        vec![
            Series::with_points("Enabled", ENABLED_COLOR, self.enabled_axis.iter().map(DataPoint::from).collect()),
            Series::with_points("Disabled", DISABLED_COLOR, self.disabled_axis.iter().map(DataPoint::from).collect()),
        ]
    }

    pub fn enabled_total(&self) -> f64 {
        self.enabled_axis.iter().map(|p| p.value).sum()
    }

    pub fn disabled_total(&self) -> f64 {
        self.disabled_axis.iter().map(|p| p.value).sum()
    }

    /// Chart titled with the feature name.
    pub fn to_chart(&self, config: ChartConfig) -> Chart {
        let mut chart = Chart::with_config(self.feature_name.clone(), config);
        for s in self.to_series() {
            chart.add_series(s);
        }
        chart
    }
}

/// Metrics aggregation window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Day,
    Week,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            other => Err(format!("unknown time range '{other}' (expected day or week)")),
        }
    }
}
