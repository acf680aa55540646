use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_account_command, handle_goal_command, handle_operation_command, handle_planned_command,
    AccountCommands, GoalCommands, OperationCommands, PlannedCommands,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack keeps your accounts, their operation history, and \
                  your saving goals in plain JSON files. Balances are always \
                  derived from the ledger, never stored."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Operation management commands
    #[command(subcommand, alias = "op")]
    Operation(OperationCommands),

    /// Saving goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Planned purchase commands
    #[command(subcommand)]
    Planned(PlannedCommands),

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            let mut storage = Storage::new(paths.clone())?;
            storage.load_all()?;
            storage.save_all()?;
            println!("Initialized fintrack in {}", paths.base_dir().display());
        }

        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!("Default currency: {}", settings.default_currency_code);
            println!("Date format: {}", settings.date_format);
            println!(
                "Initialized: {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
        }

        command => {
            let mut storage = Storage::new(paths)?;
            storage.load_all()?;

            match command {
                Commands::Account(cmd) => handle_account_command(&storage, &settings, cmd)?,
                Commands::Operation(cmd) => handle_operation_command(&storage, cmd)?,
                Commands::Goal(cmd) => handle_goal_command(&storage, cmd)?,
                Commands::Planned(cmd) => handle_planned_command(&storage, cmd)?,
                Commands::Init | Commands::Config => unreachable!(),
            }
        }
    }

    Ok(())
}
