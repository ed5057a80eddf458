// File: crates/chart-core/src/axis.rs
// Summary: Value-axis tick generation and category (x-axis) label selection.

use chrono::NaiveDate;

use crate::domain::Domain;
use crate::scale::{IndexScale, LinearScale};

/// `steps` evenly spaced values from `start` to `end` inclusive; fewer than 2 steps yields both ends.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// A labeled mark on the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    /// Unrounded value; positions are computed from this one.
    pub value: f64,
    /// Value rounded to the nearest integer for display.
    pub display: f64,
    pub y: f64,
}

impl AxisTick {
    pub fn text(&self) -> String {
        // Avoid printing "-0".
        if self.display == 0.0 { "0".to_string() } else { format!("{:.0}", self.display) }
    }
}

/// Evenly spaced ticks from `domain.min` to `domain.min + domain.span()`, bottom to top.
pub fn value_ticks(domain: &Domain, scale: &LinearScale, label_count: usize) -> Vec<AxisTick> {
    linspace(domain.min, domain.min + domain.span(), label_count.max(2))
        .into_iter()
        .map(|value| AxisTick { value, display: value.round(), y: scale.to_px(value) })
        .collect()
}

/// Category label drawn under the x axis.
#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub index: usize,
    pub x: f64,
    pub text: String,
}

/// Every `ceil(n / max_labels)`-th label, positioned on the shared index scale.
pub fn category_labels(labels: &[&str], scale: &IndexScale, max_labels: usize) -> Vec<XLabel> {
    let n = labels.len();
    if n == 0 {
        return Vec::new();
    }
    let step = label_step(n, max_labels);
    labels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(i, label)| XLabel { index: i, x: scale.to_px(i), text: short_date(label) })
        .collect()
}

/// Stride between shown labels; at least 1.
pub fn label_step(n: usize, max_labels: usize) -> usize {
    n.div_ceil(max_labels.max(1)).max(1)
}

/// `2025-01-02` -> `01/02`. Other dash-separated labels drop their first part;
/// labels without a dash are returned unchanged.
pub fn short_date(label: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return date.format("%m/%d").to_string();
    }
    match label.split_once('-') {
        Some((_, rest)) => rest.split('-').collect::<Vec<_>>().join("/"),
        None => label.to_string(),
    }
}
