// File: crates/chart-core/src/types.rs
// Summary: Shared constants (canvas size, padding, tick counts, marker and hit radii).

/// Default canvas width in pixels (multi-series chart).
pub const WIDTH: f64 = 800.0;
/// Default canvas height in pixels (multi-series chart).
pub const HEIGHT: f64 = 300.0;
/// Interior margin between the canvas edge and the plot area, in pixels.
pub const PADDING: f64 = 60.0;
/// Number of value-axis ticks.
pub const LABEL_COUNT: usize = 6;
/// Upper bound on category labels drawn along the x axis.
pub const MAX_X_LABELS: usize = 8;

/// Visible marker radius.
pub const MARKER_RADIUS: f64 = 5.0;
/// Invisible hit-region radius.
pub const HIT_RADIUS: f64 = 10.0;

/// Tooltip offset from the hovered point, in pixels (right, up).
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = 40.0;

/// Smallest domain span used as a divisor.
pub const MIN_DOMAIN_SPAN: f64 = 1.0;

// Single-series line chart preset.
pub const LINE_WIDTH: f64 = 400.0;
pub const LINE_HEIGHT: f64 = 200.0;
pub const LINE_PADDING: f64 = 40.0;
pub const LINE_LABEL_COUNT: usize = 5;
pub const LINE_MAX_X_LABELS: usize = 6;
pub const LINE_MARKER_RADIUS: f64 = 4.0;
pub const LINE_HIT_RADIUS: f64 = 8.0;
