// File: crates/chart-core/src/export.rs
// Summary: JSON and CSV export of a chart configuration.

use crate::error::{ChartError, ChartResult};
use crate::grid::format_value;
use crate::options::ChartOptions;

pub fn to_json_pretty(options: &ChartOptions) -> ChartResult<String> {
    Ok(serde_json::to_string_pretty(options)?)
}

pub fn from_json_str(input: &str) -> ChartResult<ChartOptions> {
    Ok(serde_json::from_str(input)?)
}

/// Data table: a `Category` column, then one column per series. Missing
/// points are left empty.
pub fn to_csv(options: &ChartOptions) -> ChartResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Category".to_string()];
    header.extend(options.series.iter().map(|s| s.name.clone()));
    wtr.write_record(&header)?;

    for i in 0..options.category_count() {
        let mut row = vec![options.category_label(i)];
        row.extend(
            options
                .series
                .iter()
                .map(|s| s.data.get(i).map(|&v| format_value(v)).unwrap_or_default()),
        );
        wtr.write_record(&row)?;
    }

    let bytes = wtr.into_inner().map_err(|e| ChartError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChartError::InvalidData(e.to_string()))
}
