//! CSV Export functionality
//!
//! One row per item, spreadsheet-compatible.

use std::io::Write;

use crate::error::{BasketError, BasketResult};
use crate::models::ShoppingItem;

const HEADER: [&str; 6] = ["ID", "Name", "Category", "Amount", "Completed", "Created"];

/// Export items to CSV
pub fn export_items_csv<W: Write>(items: &[ShoppingItem], writer: W) -> BasketResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let to_export = |e: csv::Error| BasketError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(to_export)?;

    for item in items {
        let amount = format!("{:.2}", item.amount.to_decimal());
        let created = item.created_at.to_rfc3339();
        csv_writer
            .write_record([
                item.id.as_str(),
                item.name.as_str(),
                item.category.name(),
                amount.as_str(),
                if item.completed { "true" } else { "false" },
                created.as_str(),
            ])
            .map_err(to_export)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BasketError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    #[test]
    fn test_csv_export() {
        let mut coffee =
            ShoppingItem::new("Coffee, beans", Category::Groceries, Money::from_cents(1250));
        coffee.completed = true;
        let items = vec![
            coffee,
            ShoppingItem::new("Cable", Category::Electronics, Money::from_dollars(9)),
        ];

        let mut output = Vec::new();
        export_items_csv(&items, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Name,Category,Amount,Completed,Created");
        assert!(lines[1].contains("\"Coffee, beans\",Groceries,12.50,true"));
        assert!(lines[2].contains("Cable,Electronics,9.00,false"));
    }

    #[test]
    fn test_empty_csv_has_header() {
        let mut output = Vec::new();
        export_items_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ID,Name,Category,Amount,Completed,Created\n"
        );
    }
}
