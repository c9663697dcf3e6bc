//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{BasketError, BasketResult};
use crate::export::json::ListExport;

/// Export the list to YAML with a header comment
pub fn export_yaml<W: Write>(export: &ListExport, writer: &mut W) -> BasketResult<()> {
    let header = format!(
        "# Basket Shopping List Export\n\
         # User: {}\n\
         # Generated: {}\n\
         # App Version: {}\n\n",
        export.user, export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| BasketError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| BasketError::Export(e.to_string()))
}
