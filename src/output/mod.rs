//! Output formatting for comparison results

mod csv;
mod json;
mod terminal;

use std::path::Path;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::OutputFormat;
use crate::stats::ComparisonResult;

pub use self::csv::{format_float, write_results, write_results_csv, ROW_LABELS};
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for stdout report formatters
pub trait OutputFormatter {
    /// Render a comparison result; `output_path` is where the CSV was saved
    fn render(
        &self,
        result: &ComparisonResult,
        output_path: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render the report to stdout
pub fn render_to_stdout(
    result: &ComparisonResult,
    output_path: &Path,
    format: OutputFormat,
    color: ColorChoice,
) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = StandardStream::stdout(color);
    formatter.render(result, output_path, &mut stdout)
}
