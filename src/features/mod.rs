//! Feature modules
//!
//! - `formatters`: numeric formatting and significance stars
//! - `stack`: combining tables
//! - `sources`: CSV and JSON row sources (`data-loading` feature)

pub mod formatters;
#[cfg(feature = "data-loading")]
pub mod sources;
pub mod stack;

pub use formatters::{format_thousands, NumberFormat, StarSide, DEFAULT_STAR_LEVELS};
#[cfg(feature = "data-loading")]
pub use sources::{read_csv, read_csv_file, read_json, CsvOptions};
pub use stack::{hstack, vstack};
