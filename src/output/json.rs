//! JSON output format

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::stats::{ComparisonResult, Significance};

use super::OutputFormatter;

/// Pretty-printed JSON output formatter
#[derive(Default)]
pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonColumn<'a> {
    name: &'a str,
    t_value: Option<f64>,
    degrees_of_freedom: Option<i64>,
    p_value: Option<f64>,
    significant: Significance,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    output: String,
    first_sample_count: usize,
    second_sample_count: usize,
    columns: Vec<JsonColumn<'a>>,
    significant_columns: Vec<&'a str>,
}

fn finite(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        result: &ComparisonResult,
        output_path: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let report = JsonReport {
            output: output_path.display().to_string(),
            first_sample_count: result.first_sample_count,
            second_sample_count: result.second_sample_count,
            columns: result
                .columns
                .iter()
                .map(|(name, c)| JsonColumn {
                    name: name.as_str(),
                    t_value: finite(c.t_value),
                    degrees_of_freedom: c.degrees_of_freedom,
                    p_value: finite(c.p_value),
                    significant: c.significant,
                })
                .collect(),
            significant_columns: result.significant_columns().collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }
}
