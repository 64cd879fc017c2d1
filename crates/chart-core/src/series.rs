// File: crates/chart-core/src/series.rs
// Summary: Series model: a named sequence of values aligned with the category axis.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesOptions {
    pub name: String,
    /// One value per category, in category order.
    pub data: Vec<f64>,
}

impl SeriesOptions {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self { name: name.into(), data }
    }

    /// Smallest and largest finite value, if any.
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Point marker shape; series cycle through them by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerSymbol {
    Circle,
    Diamond,
    Square,
    Triangle,
    TriangleDown,
}

impl MarkerSymbol {
    const CYCLE: [MarkerSymbol; 5] = [
        MarkerSymbol::Circle,
        MarkerSymbol::Diamond,
        MarkerSymbol::Square,
        MarkerSymbol::Triangle,
        MarkerSymbol::TriangleDown,
    ];

    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }
}
