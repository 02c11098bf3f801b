//! Loader: reads counter CSV files into tables

mod csv;

use std::path::Path;

use crate::error::LoadError;
use crate::model::Table;

pub use self::csv::{parse_cell_value, CsvLoader};

/// Load a counter table from a CSV file
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    CsvLoader::new().load(path)
}
