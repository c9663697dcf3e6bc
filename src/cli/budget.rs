//! Budget CLI commands
//!
//! Show or replace the spending ceiling for the current user.

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::format_budget_panel;
use crate::error::BasketResult;
use crate::services::ShoppingListService;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget, spending and remaining amount
    Show,

    /// Set the budget
    Set {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    service: &ShoppingListService<'_>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BasketResult<()> {
    match cmd {
        BudgetCommands::Show => {
            let summary = service.summary(settings.warning_threshold)?;
            print!(
                "{}",
                format_budget_panel(&summary, &settings.currency_symbol)
            );
        }

        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let state = service.set_budget(amount)?;
            println!(
                "Budget set to {}",
                state.budget.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
