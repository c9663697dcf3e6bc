//! Display formatting for terminal output
//!
//! Formats items, the budget panel and the expense summary as strings for
//! the CLI to print.

pub mod items;
pub mod summary;

pub use items::{format_item_details, format_item_table};
pub use summary::{format_budget_panel, format_expense_summary};
