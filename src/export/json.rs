//! JSON Export functionality
//!
//! Exports one user's budget, items and summary with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{BasketError, BasketResult};
use crate::models::{Money, ShoppingItem};
use crate::reports::ExpenseSummary;
use crate::services::ShoppingListService;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export of a single user's list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub user: String,
    pub budget: Money,
    pub items: Vec<ShoppingItem>,
    pub summary: ExpenseSummary,
}

impl ListExport {
    /// Snapshot the service's user
    pub fn from_service(
        service: &ShoppingListService<'_>,
        warning_threshold: f64,
    ) -> BasketResult<Self> {
        let state = service.state()?;
        let summary = ExpenseSummary::compute_with_threshold(
            state.budget,
            state.items.as_slice(),
            warning_threshold,
        );

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: service.user().to_string(),
            budget: state.budget,
            items: state.items.as_slice().to_vec(),
            summary,
        })
    }
}

/// Export the list to JSON
pub fn export_json<W: Write>(export: &ListExport, writer: &mut W, pretty: bool) -> BasketResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| BasketError::Export(e.to_string()))
}
