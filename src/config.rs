//! Configuration handling for countercmp

use std::path::PathBuf;

/// File the result table is written to when `--output` is not given
pub const DEFAULT_OUTPUT_PATH: &str = "t_statistics.csv";

/// Two-tailed significance level used for the `significant_0.05` row
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Rendering used for the report printed to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// When to highlight significant columns in terminal output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for termcolor::ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => termcolor::ColorChoice::Auto,
            ColorMode::Always => termcolor::ColorChoice::Always,
            ColorMode::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the first counter CSV
    pub first_file: PathBuf,
    /// Path to the second counter CSV
    pub second_file: PathBuf,
    /// Where the result table is written
    pub output_path: PathBuf,
    /// Stdout rendering
    pub output_format: OutputFormat,
    /// Terminal color handling
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_file: PathBuf::new(),
            second_file: PathBuf::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_format: OutputFormat::default(),
            color: ColorMode::default(),
        }
    }
}

impl Config {
    /// Create a new Config with the two input paths
    pub fn new(first_file: PathBuf, second_file: PathBuf) -> Self {
        Self {
            first_file,
            second_file,
            ..Default::default()
        }
    }

    /// Set the result CSV path
    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set color handling
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}
