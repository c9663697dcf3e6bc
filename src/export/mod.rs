//! Export module for Basket
//!
//! Exports a user's list in multiple formats:
//! - JSON: budget, items and summary, machine-readable
//! - YAML: the same content, human-readable
//! - CSV: one row per item (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_items_csv;
pub use json::{export_json, ListExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
