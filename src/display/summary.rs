//! Budget and expense summary formatting

use crate::models::Money;
use crate::reports::{BudgetStatus, ExpenseSummary};

const BAR_WIDTH: usize = 30;
const PANEL_WIDTH: usize = 44;

/// Format the budget panel: budget, spent, remaining and a progress bar
pub fn format_budget_panel(summary: &ExpenseSummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    let money = |m: Money| m.format_with_symbol(currency_symbol);

    output.push_str("Budget\n");
    output.push_str(&format!("{}\n", "─".repeat(PANEL_WIDTH)));
    output.push_str(&format!("  Budget:     {:>14}\n", money(summary.budget)));
    output.push_str(&format!(
        "  Spent:      {:>14}\n",
        money(summary.total_expenses)
    ));

    let remaining_label = if summary.is_over_budget() {
        "Over by:"
    } else {
        "Remaining:"
    };
    output.push_str(&format!(
        "  {:<12}{:>14}\n",
        remaining_label,
        money(summary.remaining_budget.abs())
    ));

    output.push_str(&format!(
        "\n  {} {:.1}%\n",
        progress_bar(summary.progress_percent, BAR_WIDTH),
        summary.progress_percent
    ));
    output.push_str(&format!(
        "  {} {}\n",
        status_marker(summary.status),
        summary.status.label()
    ));

    output
}

/// Format the full summary: budget panel, category breakdown and counts
pub fn format_expense_summary(summary: &ExpenseSummary, currency_symbol: &str) -> String {
    let mut output = format_budget_panel(summary, currency_symbol);

    output.push_str("\nBy Category\n");
    output.push_str(&format!("{}\n", "─".repeat(PANEL_WIDTH)));

    let ranked = summary.ranked_categories();
    if ranked.is_empty() {
        output.push_str("  No expenses yet.\n");
    } else {
        for spend in &ranked {
            output.push_str(&format!(
                "  {} {:<16}{:>12} {:>6.1}%\n",
                spend.category.icon(),
                spend.category.name(),
                spend.amount.format_with_symbol(currency_symbol),
                spend.share_percent
            ));
        }
    }

    output.push_str(&format!(
        "\nItems: {} ({} completed, {} pending)\n",
        summary.item_count,
        summary.completed_count,
        summary.item_count - summary.completed_count
    ));
    output.push_str(&format!(
        "Completed spend: {}  Pending spend: {}\n",
        summary.completed_expenses.format_with_symbol(currency_symbol),
        summary.pending_expenses().format_with_symbol(currency_symbol)
    ));

    output
}

fn status_marker(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::OnTrack => "✓",
        BudgetStatus::Warning => "!",
        BudgetStatus::OverBudget => "✗",
    }
}

/// Progress bar capped at full width
fn progress_bar(percent: f64, width: usize) -> String {
    let filled = if percent <= 0.0 {
        0
    } else {
        (((percent / 100.0) * width as f64).round() as usize).min(width)
    };
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
