use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cascade::cli::{
    handle_account_command, handle_balancing_command, handle_budget_command,
    handle_transaction_command, handle_weekly_command, AccountCommands, BalancingCommands,
    BudgetCommands, TransactionCommands, WeeklyCommands,
};
use cascade::config::{paths::CascadePaths, settings::Settings};
use cascade::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cascade",
    version,
    about = "Terminal-based weekly budgeting application",
    long_about = "cascade-cli distributes each category's monthly budget across the \
                  weeks of the month and cascades every week's over- or under-spending \
                  into the weeks that follow. It also reconciles account balances \
                  against the real-world values you enter."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Weekly budget overview
    #[command(subcommand)]
    Weekly(WeeklyCommands),

    /// Account balancing (reality check)
    #[command(subcommand)]
    Balancing(BalancingCommands),

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = CascadePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Weekly(cmd)) => {
            handle_weekly_command(&storage, cmd)?;
        }
        Some(Commands::Balancing(cmd)) => {
            handle_balancing_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized cascade-cli in {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!("Decimal accounts: {}", settings.decimal_accounts.join(", "));
        }
        None => {
            println!("No command given. Try 'cascade weekly show' or 'cascade --help'.");
        }
    }

    Ok(())
}
