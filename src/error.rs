//! Error types for loading counter tables and writing results

use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading an input table
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} has no header row", .path.display())]
    EmptyInput { path: PathBuf },
    #[error(
        "{}: parse error at line {line}{}: {reason}",
        .path.display(),
        .column.as_deref().map(|c| format!(", column {c}")).unwrap_or_default()
    )]
    Parse {
        path: PathBuf,
        line: u64,
        column: Option<String>,
        reason: String,
    },
}

impl LoadError {
    /// Map a `csv` crate error onto the load taxonomy
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let reason = err.to_string();
        let line = err.position().map(|p| p.line()).unwrap_or(0);

        match err.into_kind() {
            csv::ErrorKind::Io(source) => LoadError::File {
                path: path.to_path_buf(),
                source,
            },
            _ => LoadError::Parse {
                path: path.to_path_buf(),
                line,
                column: None,
                reason,
            },
        }
    }
}

/// Failure while writing the result table
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot write {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
