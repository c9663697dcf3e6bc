//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod history;
pub mod item;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use item::{handle_item_command, ItemCommands};

use crate::error::{BasketError, BasketResult};
use crate::models::{Category, Money};

/// Parse a user-entered amount such as "12.50" or "$12.50"
pub(crate) fn parse_amount(amount: &str) -> BasketResult<Money> {
    Money::parse(amount).map_err(|e| {
        BasketError::Validation(format!(
            "Invalid amount: '{}'. Use format like '12.50' or '12'. Error: {}",
            amount, e
        ))
    })
}

pub(crate) fn parse_category(category: &str) -> BasketResult<Category> {
    category
        .parse()
        .map_err(|e: crate::models::CategoryParseError| BasketError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$12.50").unwrap().cents(), 1250);
        assert!(parse_amount("twelve").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("health").unwrap(), Category::Health);
        assert!(parse_category("Snacks").unwrap_err().is_validation());
    }
}
