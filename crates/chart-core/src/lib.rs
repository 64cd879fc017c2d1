// File: crates/chart-core/src/lib.rs
// Summary: Library entry point; exports the option model, the document host and rendering.

pub mod axis;
pub mod chart;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod options;
pub mod scale;
pub mod series;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{AxisTitle, PlotLine, XAxisOptions, YAxisOptions};
pub use chart::{Chart, RenderOptions};
pub use document::{Container, Document};
pub use error::{ChartError, ChartResult};
pub use options::{
    Align, ChartOptions, LegendLayout, LegendOptions, TitleOptions, TooltipOptions, VerticalAlign,
};
pub use series::{MarkerSymbol, SeriesOptions};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
