use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use basket::cli::{
    handle_budget_command, handle_export_command, handle_history_command, handle_item_command,
    BudgetCommands, ExportFormat, ItemCommands,
};
use basket::config::{paths::BasketPaths, settings::Settings};
use basket::display::format_expense_summary;
use basket::models::UserId;
use basket::services::ShoppingListService;
use basket::storage::Storage;

#[derive(Parser)]
#[command(
    name = "basket",
    version,
    about = "Shopping list with a spending budget",
    long_about = "Basket keeps a shopping list per user, tracks spending by \
                  category, and shows how much of your budget is left."
)]
struct Cli {
    /// User whose list to use (defaults to the configured default user)
    #[arg(short, long, global = true, env = "BASKET_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Shopping list item commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Show spending by category against the budget
    Summary,

    /// Export the list to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BasketPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    let user = UserId::parse(cli.user.as_deref().unwrap_or(&settings.default_user))?;
    let service = ShoppingListService::new(&storage, &user);

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&service, &settings, cmd)?;
        }
        Some(Commands::Item(cmd)) => {
            handle_item_command(&service, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            let summary = service.summary(settings.warning_threshold)?;
            print!(
                "{}",
                format_expense_summary(&summary, &settings.currency_symbol)
            );
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&service, settings.warning_threshold, output, format, pretty)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, &user, count)?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Basket Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Default user:      {}", settings.default_user);
            println!("  Warning threshold: {}%", settings.warning_threshold);
            println!();
            println!("Current user: {}", user);
        }
        None => {
            println!("Basket - shopping list with a spending budget");
            println!();
            println!("Run 'basket --help' for usage information.");
        }
    }

    Ok(())
}
