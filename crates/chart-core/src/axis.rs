// File: crates/chart-core/src/axis.rs
// Summary: Axis options: category X axis, value Y axis with title and plot lines.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XAxisOptions {
    /// Category labels; series values are matched to them by position.
    pub categories: Vec<String>,
}

impl XAxisOptions {
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { categories: categories.into_iter().map(Into::into).collect() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisTitle {
    pub text: String,
}

/// Horizontal reference line drawn across the plot at `value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotLine {
    pub value: f64,
    pub width: f32,
    /// `#rgb` or `#rrggbb`.
    pub color: String,
}

impl Default for PlotLine {
    fn default() -> Self {
        Self { value: 0.0, width: 1.0, color: "#999999".to_string() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct YAxisOptions {
    pub title: AxisTitle,
    pub plot_lines: Vec<PlotLine>,
}
