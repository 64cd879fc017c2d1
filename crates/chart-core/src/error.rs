// File: crates/chart-core/src/error.rs
// Summary: Error type shared by option validation, the document host and rendering.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("container not found: {0}")]
    MissingContainer(String),

    #[error("series '{name}' has {actual} points, expected {expected} (one per category)")]
    SeriesLength {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
