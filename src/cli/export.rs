//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BasketError, BasketResult};
use crate::export::{csv, json, yaml, ListExport};
use crate::services::ShoppingListService;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (items only)
    Csv,
    /// JSON format (budget, items and summary)
    Json,
    /// YAML format (same as JSON, human-readable)
    Yaml,
}

/// Write the user's list to `output`
pub fn handle_export_command(
    service: &ShoppingListService<'_>,
    warning_threshold: f64,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> BasketResult<()> {
    let export = ListExport::from_service(service, warning_threshold)?;

    let file = File::create(&output).map_err(|e| {
        BasketError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            csv::export_items_csv(&export.items, &mut writer)?;
            println!(
                "Exported {} items to: {}",
                export.items.len(),
                output.display()
            );
        }
        ExportFormat::Json => {
            json::export_json(&export, &mut writer, pretty)?;
            println!("List exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_yaml(&export, &mut writer)?;
            println!("List exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| BasketError::Export(e.to_string()))
}
