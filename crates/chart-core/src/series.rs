// File: crates/chart-core/src/series.rs
// Summary: Series model (named, colored, ordered label/value points) and per-series pixel layout.

use crate::error::ChartError;
use crate::geometry::Point;
use crate::scale::{IndexScale, LinearScale};

/// Color token carried by a series. Renderers translate it to their own paint type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const BLUE: Rgba = Rgba::rgb(0x3b, 0x82, 0xf6);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ChartError> {
        let digits = hex.trim().trim_start_matches('#');
        let bad = || ChartError::InvalidColor(hex.to_string());
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
        let a = if digits.len() == 8 { byte(6)? } else { 0xff };
        Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }

    /// `#rrggbb`; alpha is emitted separately by SVG writers as an opacity.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl Default for Rgba {
    fn default() -> Self { Rgba::BLUE }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Category label, usually a `YYYY-MM-DD` date.
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// One named line. The chart only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Rgba,
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self { name: name.into(), color, points: Vec::new() }
    }

    pub fn with_points(name: impl Into<String>, color: Rgba, points: Vec<DataPoint>) -> Self {
        Self { name: name.into(), color, points }
    }

    /// Build from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(
        name: impl Into<String>,
        color: Rgba,
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        let points = pairs.into_iter().map(|(l, v)| DataPoint::new(l, v)).collect();
        Self::with_points(name, color, points)
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(DataPoint::new(label, value));
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Place every point in pixel space. Output keeps input order and length.
    pub fn plot(&self, x_scale: &IndexScale, y_scale: &LinearScale) -> Vec<PlottedPoint> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| PlottedPoint {
                index: i,
                label: p.label.clone(),
                value: p.value,
                pos: Point::new(x_scale.to_px(i), y_scale.to_px(p.value)),
            })
            .collect()
    }
}

/// A data point with its computed pixel position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedPoint {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub pos: Point,
}

impl PlottedPoint {
    pub fn x(&self) -> f64 { self.pos.x }
    pub fn y(&self) -> f64 { self.pos.y }
}
