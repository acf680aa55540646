//! Account CLI commands

use clap::Subcommand;

use super::{parse_money, resolve_account};
use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::FintrackResult;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account with an opening deposit
    Create {
        /// Account name
        name: String,
        /// Opening deposit (e.g., "100.00"); becomes the first operation
        #[arg(short, long, default_value = "0")]
        deposit: String,
        /// Currency code (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// List all accounts with balances
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Rename an account
    Rename {
        /// Account name or ID
        account: String,
        /// New name
        name: String,
    },
    /// Delete an account and everything it owns
    Delete {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> FintrackResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Create {
            name,
            deposit,
            currency,
        } => {
            let deposit = parse_money(&deposit)?;
            let currency = currency.unwrap_or_else(|| settings.default_currency_code.clone());

            let account = service.create(&name, &currency, deposit)?;

            println!("Created account: {}", account.name);
            println!("  Currency: {}", account.currency_code);
            println!("  Opening deposit: {}", deposit);
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let summaries = service.list_with_balances()?;
            print!("{}", format_account_list(&summaries));
        }

        AccountCommands::Show { account } => {
            let found = resolve_account(storage, &account)?;
            let summary = service.get_summary(&found)?;
            print!("{}", format_account_details(&summary));
        }

        AccountCommands::Rename { account, name } => {
            let found = resolve_account(storage, &account)?;
            let renamed = service.rename(found.id, &name)?;
            println!("Renamed account to: {}", renamed.name);
        }

        AccountCommands::Delete { account } => {
            let found = resolve_account(storage, &account)?;
            let cascade = service.delete(found.id)?;
            println!(
                "Deleted account '{}' ({} operations, {} goals removed)",
                found.name,
                cascade.operations.len(),
                cascade.goals.len()
            );
        }
    }

    Ok(())
}
