// File: crates/sce-value-chart/src/lib.rs
// Summary: SCE value curves: engagement levels of four service offerings across
// fifteen engagement categories, as a chart configuration.

use chart_core::{
    Align, AxisTitle, ChartOptions, ChartResult, Document, LegendLayout, LegendOptions, PlotLine,
    SeriesOptions, TitleOptions, TooltipOptions, VerticalAlign, XAxisOptions, YAxisOptions,
};

/// Container the chart renders into.
pub const CONTAINER: &str = "#c1";

pub const CATEGORIES: [&str; 15] = [
    "Cost",
    "Availability",
    "OperationalResource",
    "DedicatedContact",
    "CustomerKnowledge",
    "TechAdvisor",
    "CommunicationFreq",
    "Onsites",
    "CaseMgmt",
    "POCs",
    "Advocacy",
    "SpecialAccess",
    "Certification",
    "Roadmap&Lifecycle",
    "ExpeditedPatching",
];

/// Build the chart configuration. Pure; every call returns the same value.
pub fn sce_value_chart() -> ChartOptions {
    #[rustfmt::skip]
    let series = vec![
        //                        cost 24x7  ops  dedc know  adv call site cmgt  poc advo  spa cert rmap patch
        SeriesOptions::new("TAM", vec![3.0, 2.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 0.0, 2.0, 2.0]),
        SeriesOptions::new("SRM", vec![0.0, 2.0, 0.0, 3.0, 2.0, 0.0, 3.0, 1.0, 3.0, 1.0, 2.0, 0.0, 0.0, 2.0, 1.0]),
        SeriesOptions::new("Subscription", vec![2.0, 3.0, 3.0, 0.0, 1.0, 3.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0]),
        SeriesOptions::new("Partner/ISV SRM", vec![1.0, 2.0, 0.0, 3.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 3.0, 2.0, 3.0, 1.0]),
    ];
    ChartOptions {
        title: TitleOptions::new("SCE Value Curves", -20.0),
        subtitle: TitleOptions::new(
            "Comparison of Service Offerings (beyond base subscription)",
            -20.0,
        ),
        x_axis: XAxisOptions::with_categories(CATEGORIES),
        y_axis: YAxisOptions {
            title: AxisTitle { text: "Engagement Level".to_string() },
            plot_lines: vec![PlotLine { value: 0.0, width: 1.0, color: "#808080".to_string() }],
        },
        tooltip: TooltipOptions {
            value_suffix: "Engagement".to_string(),
            ..TooltipOptions::default()
        },
        legend: LegendOptions {
            layout: LegendLayout::Vertical,
            align: Align::Right,
            vertical_align: VerticalAlign::Middle,
            border_width: 0.0,
        },
        series,
    }
}

/// Render the chart into [`CONTAINER`] once `document` is ready.
pub fn install(document: &mut Document) -> ChartResult<()> {
    document.ready(|doc| doc.highcharts(CONTAINER, sce_value_chart()))
}
