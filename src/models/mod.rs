//! Core data models for fintrack
//!
//! This module contains the data structures that represent the ledger
//! domain: accounts, operations, categories, saving goals, and planned
//! purchases.

pub mod account;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod operation;
pub mod planned;

pub use account::Account;
pub use category::{ExpenseCategory, IncomeCategory, OperationKind};
pub use goal::SavingGoal;
pub use ids::{AccountId, GoalId, OperationId, PlannedPurchaseId};
pub use money::Money;
pub use operation::{Operation, OperationOwner, OperationUpdate};
pub use planned::PlannedPurchase;
