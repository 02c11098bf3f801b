//! Data model for counter tables

mod schema;
mod table;

pub use schema::{dedupe_names, Column};
pub use table::{Row, Table};
