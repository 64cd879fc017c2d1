// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::f32::consts::FRAC_1_SQRT_2;
use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::grid::{format_value, linspace};
use crate::layout::{self, Layout, Measured, LEGEND_SYMBOL_PADDING, LEGEND_SYMBOL_WIDTH};
use crate::options::ChartOptions;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::MarkerSymbol;
use crate::text::{Anchor, TextShaper};
use crate::theme::{parse_hex_color, Theme};
use crate::types::{
    Insets, HEIGHT, LABEL_FONT_SIZE, LEGEND_FONT_SIZE, SUBTITLE_FONT_SIZE, TITLE_FONT_SIZE, WIDTH,
};
use crate::view::ViewState;

const MARKER_RADIUS: f32 = 4.0;
const LINE_WIDTH: f32 = 2.0;
const TICK_LENGTH: f32 = 6.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text; used for pixel-exact snapshots across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub options: ChartOptions,
}

impl Chart {
    /// Wrap validated options; see [`ChartOptions::validate`].
    pub fn new(options: ChartOptions) -> ChartResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let (pixels, width, height, _stride) = self.render_to_rgba8(opts)?;
        let image = image::RgbaImage::from_raw(width, height, pixels)
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render to an unpremultiplied RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let surface_err = || ChartError::Surface { width: opts.width, height: opts.height };
        if opts.width <= 0 || opts.height <= 0 {
            return Err(surface_err());
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(surface_err)?;
        self.paint(surface.canvas(), opts)?;

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(surface_err());
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    /// Draw the whole chart onto `canvas`.
    pub fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> ChartResult<()> {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let view = ViewState::from_options(&self.options);
        let layout = self.layout(shaper.as_ref(), &view, opts);
        let plot = layout.plot;
        let ticks = view.y_ticks(plot.height());
        let (vmin, vmax) = (ticks[0], ticks[ticks.len() - 1]);
        let y_scale = ValueScale::new_linear(plot.top, plot.bottom, vmin, vmax);
        let x_scale = CategoryScale::new(plot.left, plot.right, view.categories);
        trace!(?plot, ticks = ticks.len(), categories = view.categories, "chart layout");

        draw_grid(canvas, theme, &plot, &ticks, &y_scale);
        draw_x_axis(canvas, theme, &plot, view.categories);
        self.draw_plot_lines(canvas, &plot, &y_scale)?;
        for (i, s) in self.options.series.iter().enumerate() {
            let color = theme.series_color(i);
            let points: Vec<(f32, f32)> = s
                .data
                .iter()
                .enumerate()
                .map(|(x, &y)| (x_scale.to_px(x as f64), y_scale.to_px(y)))
                .collect();
            draw_line_series(canvas, &points, color, MarkerSymbol::for_index(i));
        }
        if let Some(legend) = &layout.legend {
            self.draw_legend(canvas, theme, shaper.as_ref(), legend);
        }

        if let Some(sh) = &shaper {
            self.draw_titles(canvas, theme, sh, &layout, opts.width);
            draw_y_labels(canvas, theme, sh, &plot, &ticks, &y_scale);
            self.draw_y_title(canvas, theme, sh, &layout);
            self.draw_x_labels(canvas, theme, sh, &plot, &x_scale);
        }
        Ok(())
    }

    /// Measure text, lay out once, then again if category labels must be rotated.
    fn layout(&self, shaper: Option<&TextShaper>, view: &ViewState, opts: &RenderOptions) -> Layout {
        let legend_line_height = LEGEND_FONT_SIZE + 8.0;
        let mut m = Measured {
            legend_items: vec![0.0; self.options.series.len()],
            legend_line_height,
            ..Measured::default()
        };
        let mut widest_category = 0.0f32;

        if let Some(sh) = shaper {
            let o = &self.options;
            if !o.title.text.is_empty() { m.title_height = TITLE_FONT_SIZE; }
            if !o.subtitle.text.is_empty() { m.subtitle_height = SUBTITLE_FONT_SIZE; }
            if !o.y_axis.title.text.is_empty() { m.y_title_width = LABEL_FONT_SIZE + 2.0; }
            let provisional = (opts.height - opts.insets.vsum() as i32) as f32;
            m.y_label_width = view
                .y_ticks(provisional)
                .iter()
                .map(|&t| sh.measure_width(&format_value(t), LABEL_FONT_SIZE, false))
                .fold(0.0, f32::max);
            m.legend_items = o
                .series
                .iter()
                .map(|s| sh.measure_width(&s.name, LEGEND_FONT_SIZE, true))
                .collect();
            widest_category = (0..view.categories)
                .map(|i| sh.measure_width(&o.category_label(i), LABEL_FONT_SIZE, false))
                .fold(0.0, f32::max);
            m.x_label_height = LABEL_FONT_SIZE + 4.0;
        }

        let first = layout::compute(opts.width, opts.height, &opts.insets, &self.options.legend, &m);
        let band = first.plot.width() / view.categories.max(1) as f32;
        if shaper.is_none() || widest_category + 4.0 <= band {
            return first;
        }
        m.x_label_height = widest_category * FRAC_1_SQRT_2 + LABEL_FONT_SIZE;
        layout::compute(opts.width, opts.height, &opts.insets, &self.options.legend, &m)
    }

    fn draw_plot_lines(&self, canvas: &skia::Canvas, plot: &RectF, y: &ValueScale) -> ChartResult<()> {
        for line in &self.options.y_axis.plot_lines {
            if !y.contains(line.value) {
                continue;
            }
            let mut paint = skia::Paint::default();
            paint.set_color(parse_hex_color(&line.color)?);
            paint.set_anti_alias(true);
            paint.set_stroke_width(line.width.max(0.0));
            let py = y.to_px(line.value);
            canvas.draw_line((plot.left, py), (plot.right, py), &paint);
        }
        Ok(())
    }

    fn draw_titles(&self, canvas: &skia::Canvas, theme: &Theme, sh: &TextShaper, layout: &Layout, width: i32) {
        let center = width as f32 * 0.5;
        let o = &self.options;
        if !o.title.text.is_empty() {
            sh.draw(canvas, &o.title.text, center + o.title.x, layout.title_baseline,
                TITLE_FONT_SIZE, theme.title, false, Anchor::Middle);
        }
        if !o.subtitle.text.is_empty() {
            sh.draw(canvas, &o.subtitle.text, center + o.subtitle.x, layout.subtitle_baseline,
                SUBTITLE_FONT_SIZE, theme.subtitle, false, Anchor::Middle);
        }
    }

    fn draw_y_title(&self, canvas: &skia::Canvas, theme: &Theme, sh: &TextShaper, layout: &Layout) {
        let text = &self.options.y_axis.title.text;
        if text.is_empty() {
            return;
        }
        let anchor = (layout.y_title_x, layout.plot.center_y());
        canvas.save();
        canvas.rotate(-90.0, Some(anchor.into()));
        sh.draw(canvas, text, anchor.0, anchor.1, LABEL_FONT_SIZE + 1.0, theme.axis_title, false, Anchor::Middle);
        canvas.restore();
    }

    fn draw_x_labels(&self, canvas: &skia::Canvas, theme: &Theme, sh: &TextShaper, plot: &RectF, x: &CategoryScale) {
        let labels: Vec<String> = (0..x.count).map(|i| self.options.category_label(i)).collect();
        let widest = labels
            .iter()
            .map(|l| sh.measure_width(l, LABEL_FONT_SIZE, false))
            .fold(0.0, f32::max);
        let rotate = widest + 4.0 > x.band();
        for (i, label) in labels.iter().enumerate() {
            let cx = x.to_px(i as f64);
            let top = plot.bottom + layout::AXIS_LABEL_GAP;
            if rotate {
                // end of the label sits under its tick, text rising to the left
                canvas.save();
                canvas.rotate(-45.0, Some((cx, top).into()));
                sh.draw(canvas, label, cx, top + LABEL_FONT_SIZE * 0.35, LABEL_FONT_SIZE,
                    theme.axis_label, false, Anchor::End);
                canvas.restore();
            } else {
                sh.draw(canvas, label, cx, top + LABEL_FONT_SIZE, LABEL_FONT_SIZE,
                    theme.axis_label, false, Anchor::Middle);
            }
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, theme: &Theme, sh: Option<&TextShaper>, legend: &layout::LegendBox) {
        let border_width = self.options.legend.border_width;
        if border_width > 0.0 {
            let mut border = skia::Paint::default();
            border.set_anti_alias(true);
            border.set_style(skia::paint::Style::Stroke);
            border.set_stroke_width(border_width);
            border.set_color(theme.legend_border);
            let r = legend.rect;
            canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &border);
        }
        for (i, (s, &(x, y))) in self.options.series.iter().zip(&legend.items).enumerate() {
            let color = theme.series_color(i);
            let mut stroke = line_paint(color);
            stroke.set_stroke_width(LINE_WIDTH);
            canvas.draw_line((x, y), (x + LEGEND_SYMBOL_WIDTH, y), &stroke);
            draw_marker(canvas, (x + LEGEND_SYMBOL_WIDTH * 0.5, y), color, MarkerSymbol::for_index(i));
            if let Some(sh) = sh {
                sh.draw(canvas, &s.name, x + LEGEND_SYMBOL_WIDTH + LEGEND_SYMBOL_PADDING,
                    y + LEGEND_FONT_SIZE * 0.35, LEGEND_FONT_SIZE, theme.legend_text, true, Anchor::Start);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn line_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, plot: &RectF, ticks: &[f64], y: &ValueScale) {
    let mut paint = line_paint(theme.grid);
    paint.set_stroke_width(1.0);
    for &t in ticks {
        let py = y.to_px(t);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_x_axis(canvas: &skia::Canvas, theme: &Theme, plot: &RectF, categories: usize) {
    let mut paint = line_paint(theme.axis_line);
    paint.set_stroke_width(1.0);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
    // ticks on band boundaries
    for x in linspace(plot.left as f64, plot.right as f64, categories.max(1) + 1) {
        let x = x as f32;
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LENGTH), &paint);
    }
}

fn draw_y_labels(canvas: &skia::Canvas, theme: &Theme, sh: &TextShaper, plot: &RectF, ticks: &[f64], y: &ValueScale) {
    for &t in ticks {
        let py = y.to_px(t);
        sh.draw(canvas, &format_value(t), plot.left - layout::AXIS_LABEL_GAP, py + LABEL_FONT_SIZE * 0.35,
            LABEL_FONT_SIZE, theme.axis_label, false, Anchor::End);
    }
}

fn draw_line_series(canvas: &skia::Canvas, points: &[(f32, f32)], color: skia::Color, marker: MarkerSymbol) {
    if points.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in points.iter().skip(1) {
            path.line_to(p);
        }
        let mut stroke = line_paint(color);
        stroke.set_stroke_width(LINE_WIDTH);
        canvas.draw_path(&path, &stroke);
    }
    for &p in points {
        draw_marker(canvas, p, color, marker);
    }
}

fn draw_marker(canvas: &skia::Canvas, (x, y): (f32, f32), color: skia::Color, symbol: MarkerSymbol) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    let r = MARKER_RADIUS;
    match symbol {
        MarkerSymbol::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        MarkerSymbol::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), &fill);
        }
        MarkerSymbol::Diamond => {
            canvas.draw_path(&polygon(&[(x, y - r), (x + r, y), (x, y + r), (x - r, y)]), &fill);
        }
        MarkerSymbol::Triangle => {
            canvas.draw_path(&polygon(&[(x, y - r), (x + r, y + r), (x - r, y + r)]), &fill);
        }
        MarkerSymbol::TriangleDown => {
            canvas.draw_path(&polygon(&[(x - r, y - r), (x + r, y - r), (x, y + r)]), &fill);
        }
    }
}

fn polygon(points: &[(f32, f32)]) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path.close();
    path
}
