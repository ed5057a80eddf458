// File: crates/chart-core/src/domain.rs
// Summary: Shared value domain across all series of a chart, and the scales derived from it.

use crate::geometry::PlotRect;
use crate::scale::{domain_span, IndexScale, LinearScale};
use crate::series::Series;

/// Min/max value range over every series plotted together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Union of all finite values across `series`.
    ///
    /// Returns `None` when no series has any point. Points that exist but are all
    /// non-finite fall back to `0..1`. An all-equal domain is widened by half a unit
    /// on each side so the values sit on the vertical midpoint.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        if series.iter().all(Series::is_empty) {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for s in series {
            for p in s.points.iter().filter(|p| p.value.is_finite()) {
                min = min.min(p.value);
                max = max.max(p.value);
            }
        }
        if !min.is_finite() || !max.is_finite() {
            return Some(Self::new(0.0, 1.0));
        }
        if max == min {
            return Some(Self::new(min - 0.5, max + 0.5));
        }
        Some(Self::new(min, max))
    }

    /// Span used as a divisor (never below 1).
    pub fn span(&self) -> f64 {
        domain_span(self.min, self.max)
    }

    /// Inverted scale onto the plot's vertical extent.
    pub fn vertical_scale(&self, plot: &PlotRect) -> LinearScale {
        LinearScale::vertical(self.min, self.max, plot.top, plot.bottom)
    }
}

/// Horizontal scale shared by every series: sized by the longest one.
pub fn shared_index_scale(series: &[Series], plot: &PlotRect) -> IndexScale {
    let count = series.iter().map(Series::len).max().unwrap_or(0);
    IndexScale::new(plot.left, plot.width(), count)
}
