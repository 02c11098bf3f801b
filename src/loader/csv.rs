//! CSV counter file reader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::model::{dedupe_names, Column, Table};

/// Reader for counter CSV files
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }

    /// Open and fully read a CSV file
    pub fn load(&self, path: &Path) -> Result<Table, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let table = self.load_reader(BufReader::new(file), path)?;
        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded counter table"
        );
        Ok(table)
    }

    /// Read a table from any reader; `path` is only used in error messages
    pub fn load_reader<R: Read>(&self, reader: R, path: &Path) -> Result<Table, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| LoadError::from_csv(path, e))?
            .clone();

        if headers.is_empty() {
            return Err(LoadError::EmptyInput {
                path: path.to_path_buf(),
            });
        }

        let columns: Vec<Column> = dedupe_names(headers.iter())
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();

        let mut table = Table::new(columns);
        let width = table.column_count();

        for result in csv_reader.records() {
            let record = result.map_err(|e| LoadError::from_csv(path, e))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() > width {
                return Err(LoadError::Parse {
                    path: path.to_path_buf(),
                    line,
                    column: None,
                    reason: format!("expected {} fields, found {}", width, record.len()),
                });
            }

            let mut values = Vec::with_capacity(width);
            for (idx, field) in record.iter().enumerate() {
                let value = parse_cell_value(field).ok_or_else(|| LoadError::Parse {
                    path: path.to_path_buf(),
                    line,
                    column: Some(table.columns[idx].name.clone()),
                    reason: format!("non-numeric value {:?}", field),
                })?;
                values.push(value);
            }

            // Short rows are padded with missing values
            values.resize(width, f64::NAN);

            table.add_row(values, line as usize);
        }

        Ok(table)
    }
}

/// Cell contents read as a missing value (compared ignoring ASCII case)
const MISSING_MARKERS: &[&str] = &[
    "na", "n/a", "#n/a", "#n/a n/a", "#na", "<na>", "nan", "-nan", "1.#ind", "-1.#ind",
    "1.#qnan", "-1.#qnan", "null", "none",
];

/// Parse a cell into a number; missing markers become NaN, anything else non-numeric is `None`
pub fn parse_cell_value(s: &str) -> Option<f64> {
    let trimmed = s.trim();

    if trimmed.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| trimmed.eq_ignore_ascii_case(marker))
    {
        return Some(f64::NAN);
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(i as f64);
    }

    trimmed.parse::<f64>().ok()
}
