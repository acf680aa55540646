//! Saving goal CLI commands
//!
//! Includes the allocate/withdraw pair that moves funds between an account
//! and its goals.

use clap::Subcommand;

use super::{parse_date, parse_money, resolve_account};
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{AccountId, SavingGoal};
use crate::services::{AllocationService, GoalService};
use crate::storage::Storage;

/// Saving goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a saving goal against an account
    Create {
        /// Account name or ID
        account: String,
        /// Goal name
        name: String,
        /// Target amount (must be positive)
        target: String,
    },
    /// List an account's goals with progress
    List {
        /// Account name or ID
        account: String,
    },
    /// Show goal details
    Show {
        /// Account name or ID
        account: String,
        /// Goal name or ID
        goal: String,
    },
    /// Move funds from the account into a goal
    Allocate {
        /// Account name or ID
        account: String,
        /// Goal name or ID
        goal: String,
        /// Amount to set aside
        amount: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Return funds from a goal back to the account
    Withdraw {
        /// Account name or ID
        account: String,
        /// Goal name or ID
        goal: String,
        /// Amount to return
        amount: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change a goal's target amount
    SetTarget {
        /// Account name or ID
        account: String,
        /// Goal name or ID
        goal: String,
        /// New target amount (must be positive)
        target: String,
    },
    /// Delete a goal and its saved-funds history
    Delete {
        /// Account name or ID
        account: String,
        /// Goal name or ID
        goal: String,
    },
}

fn resolve_goal(
    storage: &Storage,
    account_id: AccountId,
    identifier: &str,
) -> FintrackResult<SavingGoal> {
    GoalService::new(storage)
        .find(account_id, identifier)?
        .ok_or_else(|| FintrackError::goal_not_found(identifier))
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> FintrackResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Create {
            account,
            name,
            target,
        } => {
            let found = resolve_account(storage, &account)?;
            let target = parse_money(&target)?;

            let goal = service.create(&name, target, found.id)?;

            println!("Created goal '{}' on account '{}':", goal.name, found.name);
            println!("  Target: {}", goal.target_amount);
            println!("  ID: {}", goal.id);
        }

        GoalCommands::List { account } => {
            let found = resolve_account(storage, &account)?;
            let progresses = service.list_with_progress(found.id)?;
            print!("{}", format_goal_list(&progresses));
        }

        GoalCommands::Show { account, goal } => {
            let found = resolve_account(storage, &account)?;
            let goal = resolve_goal(storage, found.id, &goal)?;
            let progress = service.progress(goal.id)?;
            print!("{}", format_goal_details(&progress));
        }

        GoalCommands::Allocate {
            account,
            goal,
            amount,
            date,
        } => {
            let found = resolve_account(storage, &account)?;
            let goal = resolve_goal(storage, found.id, &goal)?;
            let amount = parse_money(&amount)?;
            let date = parse_date(date.as_deref())?;

            AllocationService::new(storage).allocate(found.id, goal.id, amount, date)?;

            let progress = service.progress(goal.id)?;
            println!(
                "Allocated {} from '{}' to '{}'",
                amount, found.name, goal.name
            );
            println!(
                "  Saved: {} of {}",
                progress.current_amount, progress.goal.target_amount
            );
        }

        GoalCommands::Withdraw {
            account,
            goal,
            amount,
            date,
        } => {
            let found = resolve_account(storage, &account)?;
            let goal = resolve_goal(storage, found.id, &goal)?;
            let amount = parse_money(&amount)?;
            let date = parse_date(date.as_deref())?;

            AllocationService::new(storage).deallocate(found.id, goal.id, amount, date)?;

            let progress = service.progress(goal.id)?;
            println!(
                "Returned {} from '{}' to '{}'",
                amount, goal.name, found.name
            );
            println!(
                "  Saved: {} of {}",
                progress.current_amount, progress.goal.target_amount
            );
        }

        GoalCommands::SetTarget {
            account,
            goal,
            target,
        } => {
            let found = resolve_account(storage, &account)?;
            let goal = resolve_goal(storage, found.id, &goal)?;
            let target = parse_money(&target)?;

            let updated = service.set_target(goal.id, target)?;
            println!("Set target of '{}' to {}", updated.name, updated.target_amount);
        }

        GoalCommands::Delete { account, goal } => {
            let found = resolve_account(storage, &account)?;
            let goal = resolve_goal(storage, found.id, &goal)?;

            let removed = service.delete(goal.id)?;
            println!(
                "Deleted goal '{}' ({} operations removed)",
                goal.name,
                removed.len()
            );
        }
    }

    Ok(())
}
