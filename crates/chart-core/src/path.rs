// File: crates/chart-core/src/path.rs
// Summary: Polyline and baseline-anchored area paths built from plotted points.

use std::fmt::Write as _;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Renderer-neutral path description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Vertices in drawing order (the closing segment adds none).
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::Close => None,
            })
            .collect()
    }

    /// SVG `d` attribute, e.g. `M 40 160 L 130 100 L 220 40`.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::LineTo(p) => write!(d, "L {} {}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Connect `points` strictly in the given order. Out-of-order input draws a
/// self-intersecting line; that is accepted, not corrected.
pub fn line_path(points: &[Point]) -> Path {
    let mut commands = Vec::with_capacity(points.len());
    for (i, &p) in points.iter().enumerate() {
        commands.push(if i == 0 { PathCommand::MoveTo(p) } else { PathCommand::LineTo(p) });
    }
    Path { commands }
}

/// The line path, then down from the last point to `baseline_y`, across to
/// below the first point, and closed.
pub fn area_path(points: &[Point], baseline_y: f64) -> Path {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Path::default();
    };
    let mut path = line_path(points);
    path.commands.push(PathCommand::LineTo(Point::new(last.x, baseline_y)));
    path.commands.push(PathCommand::LineTo(Point::new(first.x, baseline_y)));
    path.commands.push(PathCommand::Close);
    path
}

/// Compact number formatting for path data: integers without decimals, others to 2 places.
pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
