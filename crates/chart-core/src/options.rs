// File: crates/chart-core/src/options.rs
// Summary: Declarative chart configuration (titles, axes, tooltip, legend, series).
// Notes:
// - Field names serialize in camelCase so a configuration reads the same as the
//   option objects of browser charting libraries (`xAxis`, `plotLines`, ...).
// - Every struct is `#[serde(default)]`; partial JSON documents load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::axis::{XAxisOptions, YAxisOptions};
use crate::error::{ChartError, ChartResult};
use crate::grid::format_value;
use crate::series::SeriesOptions;
use crate::theme::parse_hex_color;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleOptions {
    pub text: String,
    /// Horizontal offset from the centered position, in pixels.
    pub x: f32,
}

impl TitleOptions {
    pub fn new(text: impl Into<String>, x: f32) -> Self {
        Self { text: text.into(), x }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_prefix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_suffix: String,
}

impl TooltipOptions {
    /// Plain-text tooltip for one point: category header, then the series line.
    pub fn format_point(&self, category: &str, series: &str, value: f64) -> String {
        format!(
            "{category}\n\u{25CF} {series}: {}{}{}",
            self.value_prefix,
            format_value(value),
            self.value_suffix
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendLayout {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    #[default]
    Bottom,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOptions {
    pub layout: LegendLayout,
    pub align: Align,
    pub vertical_align: VerticalAlign,
    pub border_width: f32,
}

impl LegendOptions {
    /// A legend beside the plot takes width from it; otherwise it takes height.
    pub fn is_beside_plot(&self) -> bool {
        self.align != Align::Center && self.vertical_align == VerticalAlign::Middle
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: TitleOptions,
    pub subtitle: TitleOptions,
    pub x_axis: XAxisOptions,
    pub y_axis: YAxisOptions,
    pub tooltip: TooltipOptions,
    pub legend: LegendOptions,
    pub series: Vec<SeriesOptions>,
}

impl ChartOptions {
    /// Number of category slots: the category list, or the longest series when
    /// no categories are given.
    pub fn category_count(&self) -> usize {
        if !self.x_axis.categories.is_empty() {
            return self.x_axis.categories.len();
        }
        self.series.iter().map(|s| s.data.len()).max().unwrap_or(0)
    }

    /// Label for category slot `index`; falls back to the index itself.
    pub fn category_label(&self, index: usize) -> String {
        self.x_axis
            .categories
            .get(index)
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }

    pub fn series_named(&self, name: &str) -> Option<&SeriesOptions> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Tooltip text for a point, `None` when either index is out of range.
    pub fn tooltip_text(&self, series_index: usize, point_index: usize) -> Option<String> {
        let series = self.series.get(series_index)?;
        let value = *series.data.get(point_index)?;
        Some(self.tooltip.format_point(&self.category_label(point_index), &series.name, value))
    }

    /// Check the configuration before rendering.
    ///
    /// Rejects series whose length differs from the category list, non-finite
    /// values and unparsable plot line colors. Duplicate series names are only
    /// logged.
    pub fn validate(&self) -> ChartResult<()> {
        let expected = self.x_axis.categories.len();
        let mut seen = HashSet::new();
        for s in &self.series {
            if expected > 0 && s.data.len() != expected {
                return Err(ChartError::SeriesLength {
                    name: s.name.clone(),
                    expected,
                    actual: s.data.len(),
                });
            }
            if let Some(i) = s.data.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series '{}' has a non-finite value at index {i}",
                    s.name
                )));
            }
            if !seen.insert(s.name.as_str()) {
                warn!(series = %s.name, "duplicate series name");
            }
        }
        for line in &self.y_axis.plot_lines {
            parse_hex_color(&line.color)?;
            if !line.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "plot line value {} is not finite",
                    line.value
                )));
            }
        }
        Ok(())
    }
}
