//! Item display formatting
//!
//! Renders shopping items as a table or as single-item detail blocks.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::ShoppingItem;

const NAME_WIDTH: usize = 30;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "")]
    status: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ItemRow {
    fn new(item: &ShoppingItem, currency_symbol: &str) -> Self {
        Self {
            status: if item.completed { "[x]" } else { "[ ]" },
            id: item.id.short().to_string(),
            name: truncate(&item.name, NAME_WIDTH),
            category: format!("{} {}", item.category.icon(), item.category),
            amount: item.amount.format_with_symbol(currency_symbol),
        }
    }
}

/// Format items as a table, newest last
pub fn format_item_table<'a, I>(items: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a ShoppingItem>,
{
    let rows: Vec<ItemRow> = items
        .into_iter()
        .map(|item| ItemRow::new(item, currency_symbol))
        .collect();

    if rows.is_empty() {
        return "No items found.\n\nAdd one with 'basket item add <name> <amount>'.".to_string();
    }

    Table::new(rows).with(Style::modern()).to_string()
}

/// Format a single item's details
pub fn format_item_details(item: &ShoppingItem, currency_symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Item:      {}\n", item.name));
    output.push_str(&format!("ID:        {}\n", item.id));
    output.push_str(&format!(
        "Category:  {} {}\n",
        item.category.icon(),
        item.category
    ));
    output.push_str(&format!(
        "Amount:    {}\n",
        item.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Status:    {}\n",
        if item.completed { "Completed" } else { "Pending" }
    ));
    output.push_str(&format!("Added:     {}\n", item.created_at.format(date_format)));

    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}
