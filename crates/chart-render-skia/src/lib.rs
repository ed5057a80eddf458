// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a chart layout using Skia CPU raster surfaces.

use std::path::Path as FsPath;

use anyhow::{Context, Result};
use chart_core::{Chart, ChartConfig, ChartGeometry, ChartLayout, Path, PathCommand, Rgba};
use log::info;
use skia_safe as skia;

pub mod theme;

pub use theme::Theme;

const LINE_WIDTH: f32 = 3.0;
const AREA_OPACITY: f32 = 0.15;
const FONT_SIZE: f32 = 12.0;

pub struct RenderOptions {
    pub theme: Theme,
    /// Tick, x-axis and legend text. Snapshot tests turn this off since glyph
    /// rasterization differs across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true }
    }
}

pub struct SkiaRenderer {
    pub opts: RenderOptions,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Lay out `chart` and encode one frame as PNG.
    pub fn render_chart(&self, chart: &Chart) -> Result<Vec<u8>> {
        chart.config.validate()?;
        self.render_layout(&chart.layout(), &chart.title, &chart.config)
    }

    pub fn render_layout(&self, layout: &ChartLayout, title: &str, config: &ChartConfig) -> Result<Vec<u8>> {
        let (w, h) = (config.width.round() as i32, config.height.round() as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(self.opts.theme.background));

        match layout {
            ChartLayout::NoData => {
                if self.opts.draw_labels {
                    let text = format!("No data available for {title}");
                    let x = config.width as f32 / 2.0;
                    let y = config.height as f32 / 2.0;
                    draw_text(canvas, &text, x, y, Align::Center, to_skia(self.opts.theme.placeholder));
                }
            }
            ChartLayout::Plotted(g) => self.draw_geometry(canvas, g),
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `chart` and write the PNG to `path`, creating parent directories.
    pub fn render_to_png(&self, chart: &Chart, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_chart(chart)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn draw_geometry(&self, canvas: &skia::Canvas, g: &ChartGeometry) {
        let theme = &self.opts.theme;
        let plot = g.plot;
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        let mut grid = skia::Paint::default();
        grid.set_anti_alias(true);
        grid.set_stroke_width(1.0);
        grid.set_color(to_skia(theme.grid));
        for tick in &g.ticks {
            canvas.draw_line((l, tick.y as f32), (r, tick.y as f32), &grid);
        }
        grid.set_color(to_skia(theme.grid_minor));
        for label in &g.x_labels {
            canvas.draw_line((label.x as f32, t), (label.x as f32, b), &grid);
        }

        let mut axis = skia::Paint::default();
        axis.set_anti_alias(true);
        axis.set_stroke_width(2.0);
        axis.set_color(to_skia(theme.axis_line));
        canvas.draw_line((l, t), (l, b), &axis);
        canvas.draw_line((l, b), (r, b), &axis);

        for s in &g.series {
            let color = to_skia(s.color);
            if let Some(area) = s.area.as_ref().filter(|a| !a.is_empty()) {
                let mut fill = skia::Paint::default();
                fill.set_anti_alias(true);
                fill.set_style(skia::paint::Style::Fill);
                fill.set_color(color);
                fill.set_alpha_f(AREA_OPACITY * s.color.opacity() as f32);
                canvas.draw_path(&to_skia_path(area), &fill);
            }
            if !s.line.is_empty() {
                let mut stroke = skia::Paint::default();
                stroke.set_anti_alias(true);
                stroke.set_style(skia::paint::Style::Stroke);
                stroke.set_stroke_width(LINE_WIDTH);
                stroke.set_stroke_cap(skia::paint::Cap::Round);
                stroke.set_stroke_join(skia::paint::Join::Round);
                stroke.set_color(color);
                canvas.draw_path(&to_skia_path(&s.line), &stroke);
            }

            let mut marker = skia::Paint::default();
            marker.set_anti_alias(true);
            marker.set_color(color);
            let mut ring = skia::Paint::default();
            ring.set_anti_alias(true);
            ring.set_style(skia::paint::Style::Stroke);
            ring.set_stroke_width(2.0);
            ring.set_color(to_skia(theme.marker_outline));
            let radius = g.marker_radius as f32;
            for p in &s.points {
                let c = (p.x() as f32, p.y() as f32);
                canvas.draw_circle(c, radius, &marker);
                canvas.draw_circle(c, radius, &ring);
            }
        }

        if !self.opts.draw_labels {
            return;
        }
        for tick in &g.ticks {
            draw_text(canvas, &tick.text(), l - 10.0, tick.y as f32 + 4.0, Align::Right, to_skia(theme.axis_label));
        }
        for label in &g.x_labels {
            draw_text(canvas, &label.text, label.x as f32, b + 20.0, Align::Center, to_skia(theme.axis_label));
        }

        // Legend along the top edge.
        let mut lx = l;
        let ly = (t / 2.0).max(12.0);
        for s in &g.series {
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_color(to_skia(s.color));
            canvas.draw_circle((lx + 6.0, ly), 6.0, &dot);
            let w = draw_text(canvas, &s.name, lx + 16.0, ly + 4.0, Align::Left, to_skia(theme.axis_label));
            lx += 32.0 + w;
        }
    }
}

pub fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn to_skia_path(p: &Path) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in &p.commands {
        match *cmd {
            PathCommand::MoveTo(pt) => {
                path.move_to((pt.x as f32, pt.y as f32));
            }
            PathCommand::LineTo(pt) => {
                path.line_to((pt.x as f32, pt.y as f32));
            }
            PathCommand::Close => {
                path.close();
            }
        }
    }
    path
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Draws `text` anchored at `x` and returns its advance width.
fn draw_text(canvas: &skia::Canvas, text: &str, x: f32, y: f32, align: Align, color: skia::Color) -> f32 {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    let mut font = skia::Font::default();
    font.set_size(FONT_SIZE);
    let (width, _) = font.measure_str(text, Some(&paint));
    let left = match align {
        Align::Left => x,
        Align::Center => x - width / 2.0,
        Align::Right => x - width,
    };
    canvas.draw_str(text, (left, y), &font, &paint);
    width
}
