//! Independent two-sample t-test per shared column

use indexmap::IndexMap;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, warn};

use crate::config::SIGNIFICANCE_LEVEL;

use super::summary::ColumnSummary;

/// Outcome of the significance check for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Significance {
    Yes,
    No,
    /// Pooled standard error was zero, the test is undefined
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Significance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::Yes => "Yes",
            Significance::No => "No",
            Significance::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for Significance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Test statistics for one column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnComparison {
    /// NaN when undefined
    pub t_value: f64,
    /// `None` when the pooled standard error is zero
    pub degrees_of_freedom: Option<i64>,
    /// Two-tailed p-value, NaN when undefined
    pub p_value: f64,
    pub significant: Significance,
}

impl ColumnComparison {
    fn not_applicable() -> Self {
        Self {
            t_value: f64::NAN,
            degrees_of_freedom: None,
            p_value: f64::NAN,
            significant: Significance::NotApplicable,
        }
    }
}

/// Comparison of every column present in both summaries, in first-summary order
#[derive(Debug, Clone, Default)]
pub struct ComparisonResult {
    pub columns: IndexMap<String, ColumnComparison>,
    pub first_sample_count: usize,
    pub second_sample_count: usize,
}

impl ComparisonResult {
    /// n1 + n2 - 2, shared by every column
    pub fn degrees_of_freedom(&self) -> i64 {
        self.first_sample_count as i64 + self.second_sample_count as i64 - 2
    }

    pub fn get(&self, column: &str) -> Option<&ColumnComparison> {
        self.columns.get(column)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Columns flagged `Yes`, in column order
    pub fn significant_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|(_, c)| c.significant == Significance::Yes)
            .map(|(name, _)| name.as_str())
    }

    pub fn has_significant(&self) -> bool {
        self.significant_columns().next().is_some()
    }
}

/// Two-tailed p-value of `t` under Student's t with `df` degrees of freedom
pub fn two_tailed_p_value(t: f64, df: i64) -> f64 {
    if t.is_nan() || df <= 0 {
        return f64::NAN;
    }
    match StudentsT::new(0.0, 1.0, df as f64) {
        Ok(dist) => 2.0 * (1.0 - dist.cdf(t.abs())),
        Err(_) => f64::NAN,
    }
}

/// Run the t-test for every column the two summaries share.
///
/// Columns present on only one side are left out of the result.
pub fn compare(first: &ColumnSummary, second: &ColumnSummary) -> ComparisonResult {
    let mut result = ComparisonResult {
        columns: IndexMap::with_capacity(first.columns.len()),
        first_sample_count: first.sample_count,
        second_sample_count: second.sample_count,
    };
    let df = result.degrees_of_freedom();

    for (name, a) in &first.columns {
        let Some(b) = second.get(name) else {
            debug!(column = %name, "column only in first input, skipped");
            continue;
        };

        let pooled_se = (a.standard_error.powi(2) + b.standard_error.powi(2)).sqrt();
        if pooled_se == 0.0 {
            warn!(column = %name, "pooled standard error is zero, t-test not applicable");
            result
                .columns
                .insert(name.clone(), ColumnComparison::not_applicable());
            continue;
        }

        let t_value = (a.mean - b.mean) / pooled_se;
        let p_value = two_tailed_p_value(t_value, df);
        let significant = if p_value < SIGNIFICANCE_LEVEL {
            Significance::Yes
        } else {
            Significance::No
        };

        result.columns.insert(
            name.clone(),
            ColumnComparison {
                t_value,
                degrees_of_freedom: Some(df),
                p_value,
                significant,
            },
        );
    }

    for name in second.columns.keys().filter(|n| first.get(n).is_none()) {
        debug!(column = %name, "column only in second input, skipped");
    }

    result
}
