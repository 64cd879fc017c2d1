// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, plus hex color parsing.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub subtitle: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub axis_title: skia::Color,
    pub legend_text: skia::Color,
    pub legend_border: skia::Color,
    /// Series colors, assigned by series index and reused cyclically.
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            title: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            subtitle: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            grid: skia::Color::from_argb(255, 0xe6, 0xe6, 0xe6),
            axis_line: skia::Color::from_argb(255, 0xcc, 0xd6, 0xeb),
            axis_label: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            axis_title: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            legend_text: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            legend_border: skia::Color::from_argb(255, 0x99, 0x99, 0x99),
            palette: [
                skia::Color::from_rgb(0x7c, 0xb5, 0xec),
                skia::Color::from_rgb(0x43, 0x43, 0x48),
                skia::Color::from_rgb(0x90, 0xed, 0x7d),
                skia::Color::from_rgb(0xf7, 0xa3, 0x5c),
                skia::Color::from_rgb(0x80, 0x85, 0xe9),
                skia::Color::from_rgb(0xf1, 0x5c, 0x80),
                skia::Color::from_rgb(0xe4, 0xd3, 0x54),
                skia::Color::from_rgb(0x2b, 0x90, 0x8f),
                skia::Color::from_rgb(0xf4, 0x5b, 0x5b),
                skia::Color::from_rgb(0x91, 0xe8, 0xe1),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 235, 235, 245),
            subtitle: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 110, 110, 120),
            axis_label: skia::Color::from_argb(255, 200, 200, 210),
            axis_title: skia::Color::from_argb(255, 200, 200, 210),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            legend_border: skia::Color::from_argb(255, 150, 150, 160),
            palette: [
                skia::Color::from_rgb(0x2b, 0x90, 0x8f),
                skia::Color::from_rgb(0x90, 0xee, 0x7e),
                skia::Color::from_rgb(0xf4, 0x5b, 0x5b),
                skia::Color::from_rgb(0x77, 0x98, 0xbf),
                skia::Color::from_rgb(0xaa, 0xee, 0xee),
                skia::Color::from_rgb(0xff, 0x06, 0x6f),
                skia::Color::from_rgb(0xee, 0xaa, 0xee),
                skia::Color::from_rgb(0x55, 0xbf, 0x3b),
                skia::Color::from_rgb(0xdf, 0x53, 0x53),
                skia::Color::from_rgb(0x77, 0x98, 0xbf),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Parse `#rgb` or `#rrggbb` into an opaque color.
pub fn parse_hex_color(text: &str) -> ChartResult<skia::Color> {
    let invalid = || ChartError::InvalidColor(text.to_string());
    let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Ok(skia::Color::from_rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(skia::Color::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}
