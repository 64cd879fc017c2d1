// File: crates/chart-core/src/view.rs
// Data extents of a configuration and the y ticks derived from them.

use crate::grid::nice_ticks;
use crate::options::ChartOptions;
use crate::types::TICK_PIXEL_INTERVAL;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub categories: usize,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_options(options: &ChartOptions) -> Self {
        let categories = options.category_count();
        let extent = options
            .series
            .iter()
            .filter_map(|s| s.extent())
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
        let Some((y_min, mut y_max)) = extent else {
            return Self { categories, y_min: 0.0, y_max: 1.0 };
        };
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { categories, y_min, y_max }
    }

    /// Tick values for a plot of `plot_height` pixels; the first and last tick
    /// bound the value scale.
    pub fn y_ticks(&self, plot_height: f32) -> Vec<f64> {
        let target = (plot_height / TICK_PIXEL_INTERVAL).round().max(1.0) as usize;
        nice_ticks(self.y_min, self.y_max, target)
    }
}
