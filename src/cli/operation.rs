//! Operation CLI commands

use clap::Subcommand;

use super::{parse_date, parse_money, resolve_account};
use crate::display::operation::format_operation_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{OperationId, OperationKind, OperationUpdate};
use crate::services::OperationService;
use crate::storage::Storage;

/// Operation subcommands
#[derive(Subcommand)]
pub enum OperationCommands {
    /// Record an operation on an account
    Add {
        /// Account name or ID
        account: String,
        /// Amount (non-negative, e.g., "30.00")
        amount: String,
        /// Kind: "income:salary", "expense:food", or bare "income"/"expense"
        kind: String,
        /// Operation date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List an account's operations, newest first
    List {
        /// Account name or ID
        account: String,
    },
    /// Edit an operation
    Edit {
        /// Operation ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New kind
        #[arg(short, long)]
        kind: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove an operation
    Remove {
        /// Operation ID
        id: String,
    },
}

fn parse_kind(s: &str) -> FintrackResult<OperationKind> {
    OperationKind::parse(s).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid kind '{}'. Use e.g. 'income:salary' or 'expense:food'.",
            s
        ))
    })
}

fn parse_operation_id(s: &str) -> FintrackResult<OperationId> {
    s.parse::<OperationId>()
        .map_err(|_| FintrackError::operation_not_found(s))
}

/// Handle an operation command
pub fn handle_operation_command(storage: &Storage, cmd: OperationCommands) -> FintrackResult<()> {
    let service = OperationService::new(storage);

    match cmd {
        OperationCommands::Add {
            account,
            amount,
            kind,
            date,
        } => {
            let found = resolve_account(storage, &account)?;
            let amount = parse_money(&amount)?;
            let kind = parse_kind(&kind)?;
            let date = parse_date(date.as_deref())?;

            let op = service.add(found.id, date, amount, kind)?;

            println!("Recorded operation on '{}':", found.name);
            println!("  {} {} {}", op.date, op.kind, op.amount);
            println!("  ID: {}", op.id);
        }

        OperationCommands::List { account } => {
            let found = resolve_account(storage, &account)?;
            let operations = service.list(found.id)?;
            print!("{}", format_operation_list(&operations));
        }

        OperationCommands::Edit {
            id,
            amount,
            kind,
            date,
        } => {
            if amount.is_none() && kind.is_none() && date.is_none() {
                println!("No changes specified. Use --amount, --kind, or --date.");
                return Ok(());
            }

            let id = parse_operation_id(&id)?;
            let update = OperationUpdate {
                amount: amount.as_deref().map(parse_money).transpose()?,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                date: date.as_deref().map(|d| parse_date(Some(d))).transpose()?,
            };

            let updated = service.update(id, update)?;
            println!("Updated operation: {} {} {}", updated.date, updated.kind, updated.amount);
        }

        OperationCommands::Remove { id } => {
            let id = parse_operation_id(&id)?;
            let removed = service.remove(id)?;
            println!("Removed operation: {}", removed);
        }
    }

    Ok(())
}
