//! Result table as CSV

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::OutputError;
use crate::stats::ComparisonResult;

/// Row labels of the result table, top to bottom
pub const ROW_LABELS: [&str; 4] = ["t_value", "degrees_of_freedom", "p_value", "significant_0.05"];

/// Shortest round-trip float, or `na` for NaN
pub fn format_float(value: f64, na: &str) -> String {
    if value.is_nan() {
        na.to_string()
    } else {
        format!("{:?}", value)
    }
}

/// Write the four-row result table: one column per compared counter, NaN as empty field
pub fn write_results<W: Write>(result: &ComparisonResult, writer: W) -> Result<(), OutputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![String::new()];
    header.extend(result.column_names().map(str::to_string));
    csv_writer.write_record(&header)?;

    for label in ROW_LABELS {
        let mut record = vec![label.to_string()];
        for c in result.columns.values() {
            let cell = match label {
                "t_value" => format_float(c.t_value, ""),
                "degrees_of_freedom" => c
                    .degrees_of_freedom
                    .map(|df| df.to_string())
                    .unwrap_or_default(),
                "p_value" => format_float(c.p_value, ""),
                _ => c.significant.to_string(),
            };
            record.push(cell);
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the result table to it
pub fn write_results_csv(result: &ComparisonResult, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    write_results(result, BufWriter::new(file))?;
    info!(path = %path.display(), columns = result.columns.len(), "wrote t-statistics");
    Ok(())
}
