// File: crates/chart-core/tests/options.rs
// Purpose: Option validation, tooltip text, JSON shape and CSV export.

use chart_core::{
    export, Align, AxisTitle, ChartError, ChartOptions, LegendLayout, LegendOptions, PlotLine,
    SeriesOptions, TitleOptions, TooltipOptions, VerticalAlign, XAxisOptions, YAxisOptions,
};

fn sample() -> ChartOptions {
    ChartOptions {
        title: TitleOptions::new("Title", -20.0),
        subtitle: TitleOptions::new("Sub", -20.0),
        x_axis: XAxisOptions::with_categories(["Cost", "Availability", "Onsites"]),
        y_axis: YAxisOptions {
            title: AxisTitle { text: "Level".into() },
            plot_lines: vec![PlotLine { value: 0.0, width: 1.0, color: "#808080".into() }],
        },
        tooltip: TooltipOptions { value_suffix: "Engagement".into(), ..TooltipOptions::default() },
        legend: LegendOptions {
            layout: LegendLayout::Vertical,
            align: Align::Right,
            vertical_align: VerticalAlign::Middle,
            border_width: 0.0,
        },
        series: vec![
            SeriesOptions::new("A", vec![3.0, 2.0, 0.5]),
            SeriesOptions::new("B", vec![0.0, 1.0, 2.0]),
        ],
    }
}

#[test]
fn valid_options_pass() {
    sample().validate().expect("valid");
}

#[test]
fn series_length_mismatch_rejected() {
    let mut o = sample();
    o.series[1].data.push(1.0);
    match o.validate() {
        Err(ChartError::SeriesLength { name, expected, actual }) => {
            assert_eq!(name, "B");
            assert_eq!(expected, 3);
            assert_eq!(actual, 4);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn series_length_free_without_categories() {
    let mut o = sample();
    o.x_axis.categories.clear();
    o.series[1].data.push(1.0);
    o.validate().expect("no categories, no length check");
    assert_eq!(o.category_count(), 4);
    assert_eq!(o.category_label(3), "3");
}

#[test]
fn non_finite_value_rejected() {
    let mut o = sample();
    o.series[0].data[1] = f64::NAN;
    assert!(matches!(o.validate(), Err(ChartError::InvalidData(_))));
}

#[test]
fn bad_plot_line_color_rejected() {
    let mut o = sample();
    o.y_axis.plot_lines[0].color = "grey".into();
    assert!(matches!(o.validate(), Err(ChartError::InvalidColor(ref c)) if c == "grey"));
}

#[test]
fn duplicate_names_are_allowed() {
    let mut o = sample();
    o.series[1].name = "A".into();
    o.validate().expect("duplicates only warn");
}

#[test]
fn tooltip_text_uses_suffix() {
    let o = sample();
    assert_eq!(o.tooltip_text(0, 0).as_deref(), Some("Cost\n\u{25CF} A: 3Engagement"));
    assert_eq!(o.tooltip_text(0, 2).as_deref(), Some("Onsites\n\u{25CF} A: 0.5Engagement"));
    assert_eq!(o.tooltip_text(2, 0), None);
    assert_eq!(o.tooltip_text(0, 3), None);
}

#[test]
fn json_uses_camel_case_keys() {
    let json = export::to_json_pretty(&sample()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["xAxis"]["categories"][1], "Availability");
    assert_eq!(v["yAxis"]["plotLines"][0]["color"], "#808080");
    assert_eq!(v["tooltip"]["valueSuffix"], "Engagement");
    assert!(v["tooltip"].get("valuePrefix").is_none());
    assert_eq!(v["legend"]["layout"], "vertical");
    assert_eq!(v["legend"]["verticalAlign"], "middle");
    assert_eq!(v["legend"]["borderWidth"], 0.0);
    assert_eq!(v["title"]["x"], -20.0);
    assert_eq!(v["series"][0]["name"], "A");

    assert_eq!(export::from_json_str(&json).unwrap(), sample());
}

#[test]
fn partial_json_fills_defaults() {
    let o = export::from_json_str(r#"{"series":[{"name":"only","data":[1,2]}]}"#).unwrap();
    assert_eq!(o.series[0].data, vec![1.0, 2.0]);
    assert_eq!(o.legend, LegendOptions::default());
    assert_eq!(o.legend.layout, LegendLayout::Horizontal);
    assert_eq!(o.legend.vertical_align, VerticalAlign::Bottom);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(export::from_json_str("{"), Err(ChartError::Json(_))));
}

#[test]
fn csv_table_has_category_rows() {
    let csv = export::to_csv(&sample()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, vec!["Category,A,B", "Cost,3,0", "Availability,2,1", "Onsites,0.5,2"]);
}

#[test]
fn csv_leaves_missing_points_empty() {
    let mut o = sample();
    o.x_axis.categories.clear();
    o.series[1].data.truncate(1);
    let csv = export::to_csv(&o).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, vec!["Category,A,B", "0,3,0", "1,2,", "2,0.5,"]);
}
