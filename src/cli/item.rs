//! Item CLI commands
//!
//! Implements CLI commands for managing shopping list items. Items can be
//! referred to by full ID, an ID prefix, or their name.

use clap::Subcommand;

use super::{parse_amount, parse_category};
use crate::config::settings::Settings;
use crate::display::{format_item_details, format_item_table};
use crate::error::BasketResult;
use crate::models::{Category, ItemInput, ShoppingItem};
use crate::services::ShoppingListService;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to the list
    Add {
        /// Item name
        name: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        #[arg(short, long, default_value = "Groceries")]
        category: String,
    },

    /// List items
    List {
        /// Only show items in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only show items not yet completed
        #[arg(long, conflicts_with = "completed")]
        pending: bool,
        /// Only show completed items
        #[arg(long)]
        completed: bool,
    },

    /// Show item details
    Show {
        /// Item ID, ID prefix, or name
        item: String,
    },

    /// Edit an item; omitted fields keep their current value
    Edit {
        /// Item ID, ID prefix, or name
        item: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Mark an item completed, or back to pending
    Toggle {
        /// Item ID, ID prefix, or name
        item: String,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Item ID, ID prefix, or name
        item: String,
    },

    /// Delete all completed items
    ClearCompleted,
}

/// Handle an item command
pub fn handle_item_command(
    service: &ShoppingListService<'_>,
    settings: &Settings,
    cmd: ItemCommands,
) -> BasketResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ItemCommands::Add {
            name,
            amount,
            category,
        } => {
            let input = ItemInput::new(&name, parse_category(&category)?, parse_amount(&amount)?)?;
            let item = service.add_item(input)?;
            println!(
                "Added: {} {} ({})",
                item.name,
                item.amount.format_with_symbol(symbol),
                item.category
            );
            println!("  ID: {}", item.id);
        }

        ItemCommands::List {
            category,
            pending,
            completed,
        } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            let state = service.state()?;
            let items: Vec<&ShoppingItem> = state
                .items
                .iter()
                .filter(|item| matches_filter(item, category, pending, completed))
                .collect();

            println!("{}", format_item_table(items.iter().copied(), symbol));
            if !items.is_empty() {
                println!("\nTotal: {} items", items.len());
            }
        }

        ItemCommands::Show { item } => {
            let item = service.find_item(&item)?;
            print!(
                "{}",
                format_item_details(&item, symbol, &settings.date_format)
            );
        }

        ItemCommands::Edit {
            item,
            name,
            category,
            amount,
        } => {
            let current = service.find_item(&item)?;
            let name = name.unwrap_or_else(|| current.name.clone());
            let category = match category {
                Some(c) => parse_category(&c)?,
                None => current.category,
            };
            let amount = match amount {
                Some(a) => parse_amount(&a)?,
                None => current.amount,
            };

            let input = ItemInput::new(&name, category, amount)?;
            let updated = service.edit_item(current.id.as_str(), input)?;
            println!("Updated: {}", updated);
        }

        ItemCommands::Toggle { item } => {
            let updated = service.toggle_item(&item)?;
            let status = if updated.completed {
                "completed"
            } else {
                "pending"
            };
            println!("Marked '{}' as {}", updated.name, status);
        }

        ItemCommands::Delete { item } => {
            let removed = service.delete_item(&item)?;
            println!("Deleted: {}", removed.name);
        }

        ItemCommands::ClearCompleted => {
            let removed = service.clear_completed()?;
            if removed.is_empty() {
                println!("No completed items to clear.");
            } else {
                println!("Cleared {} completed items", removed.len());
            }
        }
    }

    Ok(())
}

fn matches_filter(
    item: &ShoppingItem,
    category: Option<Category>,
    pending: bool,
    completed: bool,
) -> bool {
    if category.is_some_and(|c| c != item.category) {
        return false;
    }
    if pending && item.completed {
        return false;
    }
    if completed && !item.completed {
        return false;
    }
    true
}
