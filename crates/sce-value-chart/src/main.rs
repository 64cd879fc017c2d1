// File: crates/sce-value-chart/src/main.rs
// Summary: Renders the SCE value curves chart to PNG, optionally exporting JSON and CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{export, telemetry, theme, Container, Document, RenderOptions};
use chart_core::types::{HEIGHT, WIDTH};
use clap::Parser;
use sce_value_chart::{install, sce_value_chart, CONTAINER};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sce-value-chart", about = "Render the SCE value curves chart")]
struct Cli {
    /// PNG output path.
    #[arg(long, default_value = "target/out/sce_value_chart.png")]
    out: PathBuf,

    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Theme preset: light or dark.
    #[arg(long, default_value = "light")]
    theme: String,

    /// Skip all text (titles, labels, legend names).
    #[arg(long)]
    no_labels: bool,

    /// Also write the chart configuration as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also write the data table as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Render this JSON configuration instead of the built-in one.
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    let cli = Cli::parse();

    let loaded = match &cli.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading options file '{}'", path.display()))?;
            let options = export::from_json_str(&text)
                .with_context(|| format!("parsing options file '{}'", path.display()))?;
            info!(path = %path.display(), series = options.series.len(), "loaded chart options");
            Some(options)
        }
        None => None,
    };

    let exported = loaded.clone().unwrap_or_else(sce_value_chart);
    if let Some(path) = &cli.json {
        write_text(path, &export::to_json_pretty(&exported)?)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &cli.csv {
        write_text(path, &export::to_csv(&exported)?)?;
        println!("Wrote {}", path.display());
    }

    let render = RenderOptions {
        theme: theme::find(&cli.theme),
        draw_labels: !cli.no_labels,
        ..RenderOptions::default()
    };
    let mut document = Document::new().with_render_options(render);
    document.add_container(CONTAINER, Container::new(cli.width, cli.height).with_output(&cli.out));

    match loaded {
        Some(options) => document.ready(move |doc| doc.highcharts(CONTAINER, options))?,
        None => install(&mut document)?,
    }
    document
        .fire_ready()
        .with_context(|| format!("rendering chart into {CONTAINER}"))?;

    println!("Wrote {}", cli.out.display());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text).with_context(|| format!("writing '{}'", path.display()))
}
