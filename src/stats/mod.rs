//! Statistics pipeline: row differencing, per-column summaries and the t-test

mod difference;
mod summary;
pub mod ttest;

pub use difference::difference;
pub use summary::{mean, standard_error, summarize, ColumnStats, ColumnSummary};
pub use ttest::{compare, ColumnComparison, ComparisonResult, Significance};

use crate::model::Table;

/// Run the whole pipeline over two loaded tables
pub fn compare_tables(first: &Table, second: &Table) -> ComparisonResult {
    let first_summary = summarize(&difference(first));
    let second_summary = summarize(&difference(second));
    compare(&first_summary, &second_summary)
}
