//! Consecutive-row differencing

use tracing::debug;

use crate::model::{Row, Table};

/// Subtract each row from its successor, column by column.
///
/// Every column takes part, including the time index. A difference row that
/// contains a missing value is dropped, so a complete table of `n` rows
/// yields `max(n - 1, 0)` rows.
pub fn difference(table: &Table) -> Table {
    let mut out = Table::new(table.columns.clone());
    let mut dropped = 0usize;

    for pair in table.rows.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let values: Vec<f64> = next
            .values
            .iter()
            .zip(&prev.values)
            .map(|(b, a)| b - a)
            .collect();
        let row = Row::new(values, next.source_line);

        if row.has_missing() {
            dropped += 1;
            continue;
        }
        out.rows.push(row);
    }

    if dropped > 0 {
        debug!(dropped, "dropped difference rows with missing values");
    }

    out
}
