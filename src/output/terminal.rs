//! Human-readable terminal report

use std::path::Path;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::stats::{ColumnComparison, ComparisonResult};

use super::{OutputFormatter, ROW_LABELS};

/// Digits after the decimal point for t and p values
const PRECISION: usize = 6;

/// Terminal output with colors
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_number(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value != 0.0 && value.abs() < 1e-4 {
            return format!("{:.*e}", PRECISION, value);
        }
        format!("{:.*}", PRECISION, value)
    }

    fn cell(&self, label: &str, c: &ColumnComparison) -> String {
        match label {
            "t_value" => self.format_number(c.t_value),
            "degrees_of_freedom" => c
                .degrees_of_freedom
                .map(|df| df.to_string())
                .unwrap_or_else(|| "NaN".to_string()),
            "p_value" => self.format_number(c.p_value),
            _ => c.significant.to_string(),
        }
    }

    fn write_table(&self, result: &ComparisonResult, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "T-statistics:")?;
        if result.columns.is_empty() {
            writeln!(writer, "(no columns shared by both inputs)")?;
            return Ok(());
        }

        let mut builder = Builder::default();
        let mut header = vec![String::new()];
        header.extend(result.column_names().map(str::to_string));
        builder.push_record(header);

        for label in ROW_LABELS {
            let mut record = vec![label.to_string()];
            record.extend(result.columns.values().map(|c| self.cell(label, c)));
            builder.push_record(record);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        writeln!(writer, "{}", table)?;
        Ok(())
    }

    fn write_significant(&self, result: &ComparisonResult, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer)?;
        if !result.has_significant() {
            writeln!(writer, "No significant differences found (p < 0.05)")?;
            return Ok(());
        }

        writeln!(writer, "Significant columns (p < 0.05):")?;
        for name in result.significant_columns() {
            write!(writer, "  ")?;
            writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
            write!(writer, "{}", name)?;
            writer.reset()?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(
        &self,
        result: &ComparisonResult,
        output_path: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        writeln!(writer, "T-statistics saved to {}", output_path.display())?;
        writeln!(writer)?;
        self.write_table(result, writer)?;
        self.write_significant(result, writer)?;
        Ok(())
    }
}
