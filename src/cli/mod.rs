//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod goal;
pub mod operation;
pub mod planned;

pub use account::{handle_account_command, AccountCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use operation::{handle_operation_command, OperationCommands};
pub use planned::{handle_planned_command, PlannedCommands};

use chrono::{NaiveDate, Utc};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Account, Money};
use crate::services::AccountService;
use crate::storage::Storage;

/// Parse a money argument like "100.00" or "$100"
fn parse_money(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| {
        FintrackError::Validation(format!(
            "Invalid amount '{}'. Use a format like '100.00'. {}",
            s, e
        ))
    })
}

/// Parse an optional YYYY-MM-DD date argument, defaulting to today
fn parse_date(s: Option<&str>) -> FintrackResult<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            FintrackError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", s))
        }),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Resolve an account argument (name or ID) or fail with NotFound
fn resolve_account(storage: &Storage, identifier: &str) -> FintrackResult<Account> {
    AccountService::new(storage)
        .find(identifier)?
        .ok_or_else(|| FintrackError::account_not_found(identifier))
}
