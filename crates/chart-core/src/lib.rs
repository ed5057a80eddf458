// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; renderer-agnostic multi-series chart geometry.
//
// The pipeline is: series -> shared `Domain` + `IndexScale` -> plotted points ->
// line/area paths, value ticks, x labels and hit regions, all bundled in a
// `ChartLayout`. Renderers (SVG here, Skia in `chart-render-skia`) only read it.

pub mod axis;
pub mod chart;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod path;
pub mod scale;
pub mod series;
pub mod svg;
pub mod types;

pub use axis::{AxisTick, XLabel};
pub use chart::{layout, Chart, ChartConfig, ChartGeometry, ChartLayout, SeriesGeometry};
pub use domain::Domain;
pub use error::ChartError;
pub use geometry::{PlotRect, Point};
pub use hover::{hit_test, HitId, HitRegion, PointerEvent, Tooltip, TooltipState, TooltipView};
pub use path::{area_path, line_path, Path, PathCommand};
pub use scale::{from_pixel, to_pixel, IndexScale, LinearScale};
pub use series::{DataPoint, PlottedPoint, Rgba, Series};
pub use svg::{render_svg, write_svg};
