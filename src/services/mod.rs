//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, derived balances, and cross-entity operations.

pub mod account;
pub mod allocation;
pub mod goal;
pub mod operation;
pub mod planned;

pub use account::{AccountService, AccountSummary, CascadeIds};
pub use allocation::{AllocationResult, AllocationService};
pub use goal::{GoalProgress, GoalService};
pub use operation::OperationService;
pub use planned::PlannedPurchaseService;
