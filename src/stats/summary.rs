//! Per-column mean and standard error of the mean

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::Table;

/// Statistics of one column of a differenced table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub standard_error: f64,
    pub sample_count: usize,
}

/// Column statistics in header order, plus the row count they were computed over
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnSummary {
    pub columns: IndexMap<String, ColumnStats>,
    pub sample_count: usize,
}

impl ColumnSummary {
    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.columns.get(column)
    }
}

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator) over sqrt(n); NaN when n <= 1
pub fn standard_error(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    let variance = sum_sq / (n - 1) as f64;
    variance.sqrt() / (n as f64).sqrt()
}

/// Summarize every column of a differenced table
pub fn summarize(table: &Table) -> ColumnSummary {
    let columns = table
        .columns
        .iter()
        .map(|column| {
            let values: Vec<f64> = table.column_values(column.index).collect();
            let stats = ColumnStats {
                mean: mean(&values),
                standard_error: standard_error(&values),
                sample_count: values.len(),
            };
            (column.name.clone(), stats)
        })
        .collect();

    ColumnSummary {
        columns,
        sample_count: table.row_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_mean_and_standard_error() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(mean(&values), 2.0);
        assert!(close(standard_error(&values), 1.0 / 3f64.sqrt()));
    }

    #[test]
    fn test_constant_series_has_zero_error() {
        assert_eq!(standard_error(&[2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_degenerate_inputs_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(standard_error(&[]).is_nan());
        assert!(standard_error(&[5.0]).is_nan());
        assert_eq!(mean(&[5.0]), 5.0);
    }

    #[test]
    fn test_summarize_keeps_column_order() {
        let table = Table::from_rows(
            ["time", "b", "a"],
            vec![vec![1.0, 13.0, 13.0], vec![1.0, 5.0, 7.0]],
        );
        let summary = summarize(&table);
        assert_eq!(summary.sample_count, 2);
        assert_eq!(
            summary.columns.keys().map(String::as_str).collect::<Vec<_>>(),
            ["time", "b", "a"]
        );
        let b = summary.get("b").unwrap();
        assert_eq!(b.mean, 9.0);
        assert!(close(b.standard_error, 4.0));
        assert_eq!(summary.get("time").unwrap().standard_error, 0.0);
    }

    #[test]
    fn test_summarize_empty_table() {
        let table = Table::from_rows(["time", "a"], Vec::new());
        let summary = summarize(&table);
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.columns.len(), 2);
        let a = summary.get("a").unwrap();
        assert!(a.mean.is_nan());
        assert!(a.standard_error.is_nan());
    }
}
