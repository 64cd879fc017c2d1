// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Chart, ChartOptions, RenderOptions, SeriesOptions, TitleOptions, XAxisOptions};

fn small_chart() -> Chart {
    let options = ChartOptions {
        title: TitleOptions::new("Smoke", 0.0),
        x_axis: XAxisOptions::with_categories(["a", "b", "c", "d", "e"]),
        series: vec![
            SeriesOptions::new("one", vec![0.0, 2.0, 1.0, 3.5, 2.5]),
            SeriesOptions::new("two", vec![1.0, 1.0, 2.0, 2.0, 0.5]),
        ],
        ..ChartOptions::default()
    };
    Chart::new(options).expect("valid options")
}

#[test]
fn render_smoke_png() {
    let chart = small_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_without_series() {
    let chart = Chart::new(ChartOptions::default()).expect("empty options are valid");
    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn zero_sized_surface_is_an_error() {
    let chart = small_chart();
    let opts = RenderOptions { width: 0, ..RenderOptions::default() };
    assert!(matches!(
        chart.render_to_png_bytes(&opts),
        Err(chart_core::ChartError::Surface { width: 0, .. })
    ));
}

#[test]
fn tracing_installs_at_most_once() {
    let _ = chart_core::telemetry::init_tracing("debug");
    assert!(!chart_core::telemetry::init_default_tracing());
}
