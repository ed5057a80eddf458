// File: crates/demo/src/main.rs
// Summary: rollout-demo CLI. Renders per-feature rollout metrics to SVG/PNG and decodes flag configs.

use anyhow::{bail, Context, Result};
use chart_core::ChartConfig;
use chart_render_skia::{theme, RenderOptions, SkiaRenderer};
use clap::{Args, Parser, Subcommand};
use flag_metrics::{FeatureMetrics, FlagConfig, MetricDataPoint};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rollout-demo", version, about = "Render feature rollout metrics and inspect flag configs")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write <feature>.svg and <feature>.png for every feature in a metrics file.
    Render(RenderArgs),
    /// Decode a flag configuration and print its summary.
    Flag(FlagArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Metrics file: JSON array of feature metrics, or CSV with feature,label,enabled,disabled columns.
    #[arg(short, long)]
    input: PathBuf,
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    #[arg(long, default_value_t = 60.0)]
    padding: f64,
    /// Value-axis tick count.
    #[arg(long, default_value_t = 6)]
    ticks: usize,
    /// PNG theme: light, dark, solarized-dark, solarized-light, high-contrast-dark.
    #[arg(long, default_value = "light")]
    theme: String,
    /// Fill the area under each line.
    #[arg(long, default_value_t = false)]
    area: bool,
    /// Skip PNG output.
    #[arg(long, default_value_t = false)]
    svg_only: bool,
}

#[derive(Args, Debug)]
struct FlagArgs {
    /// Flag type, e.g. SIMPLE, PERCENTAGE, STRING.
    #[arg(short = 't', long = "type")]
    kind: String,
    /// Config JSON as stored on the flag.
    #[arg(short, long)]
    config: String,
    #[arg(long, default_value = "cli")]
    feature: String,
}

/// One CSV row: counts for one feature on one label.
#[derive(Debug, Deserialize)]
struct MetricsRow {
    feature: String,
    label: String,
    enabled: f64,
    disabled: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => render(args),
        Command::Flag(args) => flag(args),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let config = ChartConfig::new(args.width, args.height)
        .with_padding(args.padding)
        .with_label_count(args.ticks)
        .with_area(args.area);
    config.validate().context("invalid chart options")?;

    let Some(theme) = theme::find(&args.theme) else {
        let names: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
        bail!("unknown theme '{}' (available: {})", args.theme, names.join(", "));
    };

    let metrics = load_metrics(&args.input)
        .with_context(|| format!("failed to load metrics '{}'", args.input.display()))?;
    info!("loaded {} features from {}", metrics.len(), args.input.display());
    if metrics.is_empty() {
        println!("No features in {}", args.input.display());
        return Ok(());
    }

    let renderer = SkiaRenderer::new(RenderOptions { theme, ..Default::default() });
    let mut stems = HashSet::new();
    for m in &metrics {
        let chart = m.to_chart(config.clone());
        let stem = unique_stem(&m.feature_name, &mut stems);

        let svg_path = args.out_dir.join(format!("{stem}.svg"));
        chart
            .write_svg(&svg_path)
            .with_context(|| format!("failed to write {}", svg_path.display()))?;
        if !args.svg_only {
            let png_path = args.out_dir.join(format!("{stem}.png"));
            renderer.render_to_png(&chart, &png_path)?;
        }

        println!(
            "{:<24} enabled {:>10}  disabled {:>10}  -> {}",
            m.feature_name,
            m.enabled_total(),
            m.disabled_total(),
            svg_path.display()
        );
    }
    Ok(())
}

fn flag(args: FlagArgs) -> Result<()> {
    let config = FlagConfig::decode(&args.kind, &args.config, &args.feature)?;
    println!("{} [{}]", args.feature, config.kind());
    println!("{config}");
    Ok(())
}

fn load_metrics(path: &Path) -> Result<Vec<FeatureMetrics>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "csv" => load_metrics_csv(path),
        _ => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}

/// Rows group by feature in first-appearance order; row order within a feature is kept.
fn load_metrics_csv(path: &Path) -> Result<Vec<FeatureMetrics>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;
    let mut out: Vec<FeatureMetrics> = Vec::new();
    for (i, row) in rdr.deserialize::<MetricsRow>().enumerate() {
        let row = row.with_context(|| format!("bad CSV row {}", i + 1))?;
        let idx = match out.iter().position(|m| m.feature_name == row.feature) {
            Some(idx) => idx,
            None => {
                out.push(FeatureMetrics {
                    feature_name: row.feature.clone(),
                    enabled_axis: Vec::new(),
                    disabled_axis: Vec::new(),
                });
                out.len() - 1
            }
        };
        let m = &mut out[idx];
        m.enabled_axis.push(MetricDataPoint { value: row.enabled, label: row.label.clone() });
        m.disabled_axis.push(MetricDataPoint { value: row.disabled, label: row.label });
    }
    debug!("csv: {} features", out.len());
    Ok(out)
}

/// Feature names become file names; keep them to a safe character set.
fn file_stem(feature: &str) -> String {
    let stem: String = feature
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() { "feature".to_string() } else { stem }
}

/// `file_stem`, suffixed with `-2`, `-3`, ... when an earlier feature already took it.
fn unique_stem(feature: &str, taken: &mut HashSet<String>) -> String {
    let base = file_stem(feature);
    let mut stem = base.clone();
    let mut n = 2;
    while taken.contains(&stem) {
        stem = format!("{base}-{n}");
        n += 1;
    }
    if stem != base {
        warn!("feature '{feature}' collides with an earlier output name; writing {stem}.*");
    }
    taken.insert(stem.clone());
    stem
}
