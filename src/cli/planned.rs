//! Planned purchase CLI commands

use clap::Subcommand;

use super::parse_money;
use crate::display::planned::format_planned_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseCategory, PlannedPurchaseId};
use crate::services::PlannedPurchaseService;
use crate::storage::Storage;

/// Planned purchase subcommands
#[derive(Subcommand)]
pub enum PlannedCommands {
    /// Add something to the wishlist
    Add {
        /// What is being bought
        name: String,
        /// Expected price
        price: String,
        /// Expense category (food, rent, gift, saving, trip)
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// List the wishlist
    List,
    /// Remove a planned purchase
    Remove {
        /// Planned purchase ID
        id: String,
    },
}

/// Handle a planned purchase command
pub fn handle_planned_command(storage: &Storage, cmd: PlannedCommands) -> FintrackResult<()> {
    let service = PlannedPurchaseService::new(storage);

    match cmd {
        PlannedCommands::Add {
            name,
            price,
            category,
        } => {
            let price = parse_money(&price)?;
            let category = ExpenseCategory::parse(&category).ok_or_else(|| {
                FintrackError::Validation(format!(
                    "Invalid category '{}'. Valid: food, rent, gift, saving, trip, other",
                    category
                ))
            })?;

            let planned = service.add(&name, price, category)?;
            println!("Planned purchase: {} ({})", planned.name, planned.price);
            println!("  ID: {}", planned.id);
        }

        PlannedCommands::List => {
            let planned = service.list()?;
            print!("{}", format_planned_list(&planned));
        }

        PlannedCommands::Remove { id } => {
            let id = id
                .parse::<PlannedPurchaseId>()
                .map_err(|_| FintrackError::planned_purchase_not_found(&id))?;
            let removed = service.remove(id)?;
            println!("Removed planned purchase: {}", removed.name);
        }
    }

    Ok(())
}
