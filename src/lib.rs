//! countercmp - statistical comparison of performance counter runs
//!
//! Loads two counter CSV files, differences consecutive samples, and runs an
//! independent two-sample t-test on every column the files share.

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod stats;

pub use config::Config;
pub use error::{LoadError, OutputError};
pub use model::Table;
pub use stats::{compare_tables, ComparisonResult, Significance};
