//! Table and Row data structures

use rustc_hash::FxHashMap;

use super::schema::Column;

/// A row of numeric values; missing cells are NaN
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Values in column order
    pub values: Vec<f64>,
    /// Original line number in source file (1-indexed)
    pub source_line: usize,
}

impl Row {
    /// Create a new row
    pub fn new(values: Vec<f64>, source_line: usize) -> Self {
        Self {
            values,
            source_line,
        }
    }

    /// Get a value by column index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// True if any value is missing
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }
}

/// An ordered, time-indexed table of counter values
#[derive(Debug, Clone)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows in file order
    pub rows: Vec<Row>,
    /// Column name to position
    column_index: FxHashMap<String, usize>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self {
            columns,
            rows: Vec::new(),
            column_index,
        }
    }

    /// Build a table from column names and row values (rows numbered from line 2)
    pub fn from_rows<S: Into<String>>(names: impl IntoIterator<Item = S>, rows: Vec<Vec<f64>>) -> Self {
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();
        let mut table = Self::new(columns);
        for (i, values) in rows.into_iter().enumerate() {
            table.add_row(values, i + 2);
        }
        table
    }

    /// Add a row to the table
    pub fn add_row(&mut self, values: Vec<f64>, source_line: usize) {
        self.rows.push(Row::new(values, source_line));
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    /// Iterate over the values of one column
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(f64::NAN))
    }

    /// Column names in header order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
