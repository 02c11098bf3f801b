//! countercmp - t-test comparison of two performance counter runs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use countercmp::config::{ColorMode, Config, OutputFormat, DEFAULT_OUTPUT_PATH};
use countercmp::loader::load_table;
use countercmp::output::{render_to_stdout, write_results_csv};
use countercmp::stats::compare_tables;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColor {
    Auto,
    Always,
    Never,
}

impl From<CliColor> for ColorMode {
    fn from(c: CliColor) -> Self {
        match c {
            CliColor::Auto => ColorMode::Auto,
            CliColor::Always => ColorMode::Always,
            CliColor::Never => ColorMode::Never,
        }
    }
}

/// Compare performance counters between two CSV files using a t-test
#[derive(Parser, Debug)]
#[command(name = "countercmp")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Input CSV format:
  time,counter1,counter2,counter3
  1,12,45,28
  2,25,58,72
  3,30,65,85

Output contains t-values, degrees of freedom, p-values and significance tests.")]
struct Cli {
    /// First CSV file
    csv1: PathBuf,

    /// Second CSV file
    csv2: PathBuf,

    /// Output file for t-statistics
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Format of the report printed to stdout
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Highlight significant columns
    #[arg(long, value_enum, default_value = "auto")]
    color: CliColor,

    /// Log pipeline details to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.csv1, cli.csv2)
        .with_output_path(cli.output)
        .with_output_format(cli.format.into())
        .with_color(cli.color.into());

    let first = load_table(&config.first_file)
        .with_context(|| format!("Failed to load {}", config.first_file.display()))?;
    let second = load_table(&config.second_file)
        .with_context(|| format!("Failed to load {}", config.second_file.display()))?;

    let result = compare_tables(&first, &second);
    info!(
        columns = result.columns.len(),
        degrees_of_freedom = result.degrees_of_freedom(),
        "t-test complete"
    );

    write_results_csv(&result, &config.output_path).with_context(|| {
        format!("Failed to write {}", config.output_path.display())
    })?;

    render_to_stdout(
        &result,
        &config.output_path,
        config.output_format,
        config.color.into(),
    )?;

    Ok(())
}
