// File: crates/chart-core/src/chart.rs
// Summary: Chart configuration and the layout pass that turns series into renderable geometry.

use log::debug;

use crate::axis::{category_labels, value_ticks, AxisTick, XLabel};
use crate::domain::{shared_index_scale, Domain};
use crate::error::ChartError;
use crate::geometry::{PlotRect, Point};
use crate::hover::{HitId, HitRegion};
use crate::path::{area_path, line_path, Path};
use crate::series::{PlottedPoint, Rgba, Series};
use crate::types::*;

/// Canvas size and layout knobs. Recognized options: padding, label count, width/height.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Interior margin on every side of the plot area.
    pub padding: f64,
    /// Number of value-axis ticks; values below 2 are treated as 2.
    pub label_count: usize,
    pub max_x_labels: usize,
    pub marker_radius: f64,
    pub hit_radius: f64,
    /// Also build a filled area under each line.
    pub show_area: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            label_count: LABEL_COUNT,
            max_x_labels: MAX_X_LABELS,
            marker_radius: MARKER_RADIUS,
            hit_radius: HIT_RADIUS,
            show_area: false,
        }
    }
}

impl ChartConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Smaller single-series preset.
    pub fn line_preset() -> Self {
        Self {
            width: LINE_WIDTH,
            height: LINE_HEIGHT,
            padding: LINE_PADDING,
            label_count: LINE_LABEL_COUNT,
            max_x_labels: LINE_MAX_X_LABELS,
            marker_radius: LINE_MARKER_RADIUS,
            hit_radius: LINE_HIT_RADIUS,
            show_area: false,
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_label_count(mut self, label_count: usize) -> Self {
        self.label_count = label_count;
        self
    }

    pub fn with_area(mut self, show_area: bool) -> Self {
        self.show_area = show_area;
        self
    }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::inset(self.width, self.height, self.padding)
    }

    /// Check dimensions before handing the config to a renderer.
    pub fn validate(&self) -> Result<(), ChartError> {
        let dims = [("width", self.width), ("height", self.height)];
        for (name, v) in dims {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChartError::InvalidConfig(format!("{name} must be a positive number, got {v}")));
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidConfig(format!("padding must be non-negative, got {}", self.padding)));
        }
        let plot = self.plot_rect();
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "padding {} leaves no plot area on a {}x{} canvas",
                self.padding, self.width, self.height
            )));
        }
        if !(self.marker_radius >= 0.0 && self.hit_radius >= 0.0) {
            return Err(ChartError::InvalidConfig("marker and hit radii must be non-negative".to_string()));
        }
        Ok(())
    }
}

/// Geometry for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub name: String,
    pub color: Rgba,
    pub points: Vec<PlottedPoint>,
    /// Empty for fewer than two points: a lone point renders as a marker only.
    pub line: Path,
    /// Present when the config asks for area fills and the series has points.
    pub area: Option<Path>,
}

/// Everything a rendering surface needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub plot: PlotRect,
    pub domain: Domain,
    pub series: Vec<SeriesGeometry>,
    pub ticks: Vec<AxisTick>,
    pub x_labels: Vec<XLabel>,
    pub hit_regions: Vec<HitRegion>,
    pub marker_radius: f64,
}

/// Result of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartLayout {
    /// No series, or every series empty. Render a placeholder.
    NoData,
    Plotted(ChartGeometry),
}

impl ChartLayout {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartLayout::NoData)
    }

    pub fn geometry(&self) -> Option<&ChartGeometry> {
        match self {
            ChartLayout::NoData => None,
            ChartLayout::Plotted(g) => Some(g),
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub config: ChartConfig,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), series: Vec::new(), config: ChartConfig::default() }
    }

    pub fn with_config(title: impl Into<String>, config: ChartConfig) -> Self {
        Self { title: title.into(), series: Vec::new(), config }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Compute geometry for the current series and config. Never fails: empty
    /// input yields [`ChartLayout::NoData`], a flat domain is clamped.
    pub fn layout(&self) -> ChartLayout {
        layout(&self.series, &self.config)
    }
}

/// Layout `series` on one shared value domain and one shared index scale.
pub fn layout(series: &[Series], config: &ChartConfig) -> ChartLayout {
    let Some(domain) = Domain::from_series(series) else {
        debug!("layout: no data across {} series", series.len());
        return ChartLayout::NoData;
    };

    let plot = config.plot_rect();
    let x_scale = shared_index_scale(series, &plot);
    let y_scale = domain.vertical_scale(&plot);

    let mut geoms = Vec::with_capacity(series.len());
    let mut hit_regions = Vec::new();
    for (si, s) in series.iter().enumerate() {
        let points = s.plot(&x_scale, &y_scale);
        let pixels: Vec<Point> = points.iter().map(|p| p.pos).collect();
        let line = if pixels.len() >= 2 { line_path(&pixels) } else { Path::default() };
        let area = (config.show_area && !pixels.is_empty()).then(|| area_path(&pixels, plot.baseline()));

        hit_regions.extend(points.iter().map(|p| HitRegion {
            id: HitId { series: si, point: p.index },
            center: p.pos,
            radius: config.hit_radius,
            series_name: s.name.clone(),
            label: p.label.clone(),
            value: p.value,
        }));
        geoms.push(SeriesGeometry { name: s.name.clone(), color: s.color, points, line, area });
    }

    let ticks = value_ticks(&domain, &y_scale, config.label_count);
    // All series share one label set; the first non-empty one supplies it.
    let labels: Vec<&str> = series
        .iter()
        .find(|s| !s.is_empty())
        .map(|s| s.points.iter().map(|p| p.label.as_str()).collect())
        .unwrap_or_default();
    let x_labels = category_labels(&labels, &x_scale, config.max_x_labels);

    debug!(
        "layout: {} series, domain [{}, {}], {} hit regions",
        geoms.len(), domain.min, domain.max, hit_regions.len()
    );

    ChartLayout::Plotted(ChartGeometry {
        width: config.width,
        height: config.height,
        plot,
        domain,
        series: geoms,
        ticks,
        x_labels,
        hit_regions,
        marker_radius: config.marker_radius,
    })
}
