// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms.

/// Category index along X.
pub type Logical = f64;
/// Value Y coordinate (e.g., engagement level).
pub type Value = f64;

/// Horizontal category scale: `count` equal bands between `left_px` and `right_px`,
/// each category drawn at the middle of its band.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count: count.max(1) }
    }
    #[inline]
    pub fn band(&self) -> f32 {
        (self.right_px - self.left_px).max(0.0) / self.count as f32
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + (x as f32 + 0.5) * self.band()
    }
    /// Category under a pixel column, if any.
    pub fn index_at(&self, px: f32) -> Option<usize> {
        if px < self.left_px || px >= self.right_px || self.band() <= 0.0 {
            return None;
        }
        Some(((px - self.left_px) / self.band()) as usize)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        // halved so extents near f64::MAX do not overflow the difference
        let span = (self.vmax / 2.0 - self.vmin / 2.0).max(1e-12);
        let t = (y / 2.0 - self.vmin / 2.0) / span;
        self.bottom_px - t as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
    pub fn contains(&self, y: Value) -> bool {
        y >= self.vmin - 1e-9 && y <= self.vmax + 1e-9
    }
}
