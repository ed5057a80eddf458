// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of a chart layout (grid, axes, labels, lines, areas, markers, hit circles).

use std::path::Path as FsPath;

use log::info;

use crate::chart::{Chart, ChartGeometry, ChartLayout};
use crate::error::ChartError;
use crate::path::fmt_num;

const GRID_COLOR: &str = "#f3f4f6";
const VGRID_COLOR: &str = "#f9fafb";
const AXIS_COLOR: &str = "#6b7280";
const LABEL_COLOR: &str = "#4b5563";
const PLACEHOLDER_COLOR: &str = "#6b7280";
const LINE_WIDTH: f64 = 3.0;
const AREA_OPACITY: f64 = 0.15;

/// Accumulates SVG elements; `finish` wraps them in the document root.
#[derive(Debug)]
pub struct SvgWriter {
    width: f64,
    height: f64,
    content: Vec<String>,
}

impl SvgWriter {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, content: Vec::new() }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        self.content.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_num(x1), fmt_num(y1), fmt_num(x2), fmt_num(y2), stroke, fmt_num(width)
        ));
    }

    pub fn text(&mut self, x: f64, y: f64, anchor: &str, fill: &str, text: &str) {
        self.content.push(format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"12\" font-family=\"sans-serif\" fill=\"{}\">{}</text>",
            fmt_num(x), fmt_num(y), anchor, fill, escape_xml(text)
        ));
    }

    pub fn raw(&mut self, element: String) {
        self.content.push(element);
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n  {}\n</svg>\n",
            self.content.join("\n  "),
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        )
    }
}

/// Render `layout` as a standalone SVG document.
pub fn render_svg(layout: &ChartLayout, title: &str, width: f64, height: f64) -> String {
    let mut svg = SvgWriter::new(width, height);
    svg.raw(format!("<title>{}</title>", escape_xml(title)));
    match layout {
        ChartLayout::NoData => {
            svg.text(width / 2.0, height / 2.0, "middle", PLACEHOLDER_COLOR, &format!("No data available for {title}"));
        }
        ChartLayout::Plotted(g) => draw_geometry(&mut svg, g),
    }
    svg.finish()
}

fn draw_geometry(svg: &mut SvgWriter, g: &ChartGeometry) {
    let plot = g.plot;

    for tick in &g.ticks {
        svg.line(plot.left, tick.y, plot.right, tick.y, GRID_COLOR, 1.0);
    }
    for label in &g.x_labels {
        svg.line(label.x, plot.top, label.x, plot.bottom, VGRID_COLOR, 1.0);
    }

    svg.line(plot.left, plot.top, plot.left, plot.bottom, AXIS_COLOR, 2.0);
    svg.line(plot.left, plot.bottom, plot.right, plot.bottom, AXIS_COLOR, 2.0);

    for tick in &g.ticks {
        svg.text(plot.left - 10.0, tick.y + 4.0, "end", LABEL_COLOR, &tick.text());
    }

    // Legend along the top edge.
    let mut lx = plot.left;
    let ly = (plot.top / 2.0).max(12.0);
    for s in &g.series {
        svg.raw(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"{}\"/>",
            fmt_num(lx + 6.0), fmt_num(ly), s.color.to_hex()
        ));
        svg.text(lx + 16.0, ly + 4.0, "start", LABEL_COLOR, &s.name);
        lx += 32.0 + 7.0 * s.name.chars().count() as f64;
    }

    for s in &g.series {
        let color = s.color.to_hex();
        svg.raw(format!("<g class=\"series\" data-name=\"{}\">", escape_xml(&s.name)));
        if let Some(area) = s.area.as_ref().filter(|a| !a.is_empty()) {
            svg.raw(format!(
                "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"none\"/>",
                area.to_svg_d(), color, fmt_num(AREA_OPACITY * s.color.opacity())
            ));
        }
        if !s.line.is_empty() {
            svg.raw(format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                s.line.to_svg_d(), color, fmt_num(s.color.opacity()), fmt_num(LINE_WIDTH)
            ));
        }
        for p in &s.points {
            svg.raw(format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"2\"/>",
                fmt_num(p.x()), fmt_num(p.y()), fmt_num(g.marker_radius), color
            ));
        }
        svg.raw("</g>".to_string());
    }

    // Hit circles last so they sit above every marker.
    for r in &g.hit_regions {
        svg.raw(format!(
            "<circle class=\"hit\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"transparent\"><title>{}</title></circle>",
            fmt_num(r.center.x),
            fmt_num(r.center.y),
            fmt_num(r.radius),
            escape_xml(&r.content())
        ));
    }

    for label in &g.x_labels {
        svg.text(label.x, plot.bottom + 20.0, "middle", LABEL_COLOR, &label.text);
    }
}

/// Write the SVG for `layout` to `path`, creating parent directories.
pub fn write_svg(
    layout: &ChartLayout,
    title: &str,
    width: f64,
    height: f64,
    path: impl AsRef<FsPath>,
) -> Result<(), ChartError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_svg(layout, title, width, height))?;
    info!("wrote {}", path.display());
    Ok(())
}

impl Chart {
    pub fn to_svg(&self) -> String {
        render_svg(&self.layout(), &self.title, self.config.width, self.config.height)
    }

    /// Validate the config, lay out, and write an SVG file.
    pub fn write_svg(&self, path: impl AsRef<FsPath>) -> Result<(), ChartError> {
        self.config.validate()?;
        write_svg(&self.layout(), &self.title, self.config.width, self.config.height, path)
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
