// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers and tick label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `span / target` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let multiple = [1.0, 2.0, 2.5, 5.0]
        .into_iter()
        .find(|&m| normalized <= m + 1e-9)
        .unwrap_or(10.0);
    multiple * magnitude
}

/// Ticks covering `[min, max]`, both ends snapped outward to the step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return vec![0.0, 1.0];
    }
    let (lo, hi) = if max > min { (min, max) } else { (min, min + 1.0) };
    // spans past f64::MAX have no usable step; fall back to the bare extents
    if !(hi - lo).is_finite() {
        return vec![lo, hi];
    }
    let step = nice_step(hi - lo, target);
    let start = (lo / step + 1e-9).floor() * step;
    let end = (hi / step - 1e-9).ceil() * step;
    if !(end - start).is_finite() {
        return vec![lo, hi];
    }
    let count = ((end - start) / step).round() as usize;
    (0..=count.max(1))
        .map(|i| {
            let v = start + step * i as f64;
            // snap away float noise such as 0.30000000000000004
            (v / step).round() * step
        })
        .collect()
}

/// Format a value for labels, tooltips and exports: integral values print
/// without decimals, others with at most four.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
