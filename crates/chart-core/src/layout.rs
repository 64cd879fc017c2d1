// File: crates/chart-core/src/layout.rs
// Summary: Pure layout pass: title block, legend box and plot rectangle from measured text.
// Notes:
// - No Skia types here; the renderer measures text and passes sizes in, which keeps
//   layout testable without fonts.

use crate::geometry::RectF;
use crate::options::{Align, LegendLayout, LegendOptions, VerticalAlign};
use crate::types::Insets;

pub const LEGEND_SYMBOL_WIDTH: f32 = 16.0;
pub const LEGEND_SYMBOL_PADDING: f32 = 5.0;
pub const LEGEND_PADDING: f32 = 8.0;
pub const LEGEND_ITEM_DISTANCE: f32 = 20.0;
pub const LEGEND_MARGIN: f32 = 12.0;
pub const TITLE_SPACING: f32 = 4.0;
pub const TITLE_MARGIN: f32 = 15.0;
pub const AXIS_LABEL_GAP: f32 = 8.0;

/// Text extents measured by the renderer. Zero means "nothing to draw".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measured {
    pub title_height: f32,
    pub subtitle_height: f32,
    /// Widest y tick label.
    pub y_label_width: f32,
    /// Thickness of the rotated y-axis title.
    pub y_title_width: f32,
    pub x_label_height: f32,
    /// Text width of each legend item, in series order.
    pub legend_items: Vec<f32>,
    pub legend_line_height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendBox {
    pub rect: RectF,
    /// Left edge of each item's symbol and the vertical center of its row.
    pub items: Vec<(f32, f32)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub title_baseline: f32,
    pub subtitle_baseline: f32,
    /// Baseline of the y-axis title once rotated a quarter turn counterclockwise.
    pub y_title_x: f32,
    pub plot: RectF,
    pub legend: Option<LegendBox>,
}

fn legend_item_width(text_width: f32) -> f32 {
    LEGEND_SYMBOL_WIDTH + LEGEND_SYMBOL_PADDING + text_width
}

fn legend_box_size(legend: &LegendOptions, m: &Measured) -> (f32, f32) {
    let n = m.legend_items.len() as f32;
    match legend.layout {
        LegendLayout::Vertical => {
            let widest = m.legend_items.iter().copied().map(legend_item_width).fold(0.0, f32::max);
            (widest + 2.0 * LEGEND_PADDING, n * m.legend_line_height + 2.0 * LEGEND_PADDING)
        }
        LegendLayout::Horizontal => {
            let total: f32 = m.legend_items.iter().copied().map(legend_item_width).sum();
            let gaps = (n - 1.0).max(0.0) * LEGEND_ITEM_DISTANCE;
            (total + gaps + 2.0 * LEGEND_PADDING, m.legend_line_height + 2.0 * LEGEND_PADDING)
        }
    }
}

fn legend_items(legend: &LegendOptions, rect: &RectF, m: &Measured) -> Vec<(f32, f32)> {
    let mut x = rect.left + LEGEND_PADDING;
    let row_center = rect.top + LEGEND_PADDING + m.legend_line_height * 0.5;
    m.legend_items
        .iter()
        .enumerate()
        .map(|(i, &w)| match legend.layout {
            LegendLayout::Vertical => (x, row_center + m.legend_line_height * i as f32),
            LegendLayout::Horizontal => {
                let at = (x, row_center);
                x += legend_item_width(w) + LEGEND_ITEM_DISTANCE;
                at
            }
        })
        .collect()
}

pub fn compute(width: i32, height: i32, insets: &Insets, legend: &LegendOptions, m: &Measured) -> Layout {
    let mut area = RectF::from_ltrb(
        insets.left as f32,
        insets.top as f32,
        width as f32 - insets.right as f32,
        height as f32 - insets.bottom as f32,
    );

    // Title block
    let title_baseline = area.top + m.title_height;
    if m.title_height > 0.0 {
        area.top = title_baseline + TITLE_SPACING;
    }
    let subtitle_baseline = area.top + m.subtitle_height;
    if m.subtitle_height > 0.0 {
        area.top = subtitle_baseline + TITLE_SPACING;
    }
    if m.title_height > 0.0 || m.subtitle_height > 0.0 {
        area.top += TITLE_MARGIN;
    }

    // Legend
    let legend_box = if m.legend_items.is_empty() {
        None
    } else {
        let (bw, bh) = legend_box_size(legend, m);
        let bw = bw.min(area.width());
        let left = match legend.align {
            Align::Left => area.left,
            Align::Center => area.center_x() - bw * 0.5,
            Align::Right => area.right - bw,
        };
        let top = match legend.vertical_align {
            VerticalAlign::Top => area.top,
            VerticalAlign::Middle => area.center_y() - bh * 0.5,
            VerticalAlign::Bottom => area.bottom - bh,
        };
        let rect = RectF::from_ltwh(left, top, bw, bh);
        if legend.is_beside_plot() {
            match legend.align {
                Align::Left => area.left += bw + LEGEND_MARGIN,
                _ => area.right -= bw + LEGEND_MARGIN,
            }
        } else {
            match legend.vertical_align {
                VerticalAlign::Top => area.top += bh + LEGEND_MARGIN,
                _ => area.bottom -= bh + LEGEND_MARGIN,
            }
        }
        let items = legend_items(legend, &rect, m);
        Some(LegendBox { rect, items })
    };

    // Axis labels
    let y_title_x = area.left + m.y_title_width * 0.8;
    let mut plot_left = area.left + m.y_label_width + AXIS_LABEL_GAP;
    if m.y_title_width > 0.0 {
        plot_left += m.y_title_width + AXIS_LABEL_GAP;
    }
    let plot_bottom = area.bottom - m.x_label_height - AXIS_LABEL_GAP;
    let plot = RectF::from_ltrb(
        plot_left,
        area.top,
        area.right.max(plot_left + 1.0),
        plot_bottom.max(area.top + 1.0),
    );

    Layout { title_baseline, subtitle_baseline, y_title_x, plot, legend: legend_box }
}
