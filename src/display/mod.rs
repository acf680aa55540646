//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.
//! Sorting for presentation (operations newest-first) happens here, never
//! in the ledger core.

pub mod account;
pub mod goal;
pub mod operation;
pub mod planned;

pub use account::{format_account_details, format_account_list};
pub use goal::{format_goal_details, format_goal_list};
pub use operation::format_operation_list;
pub use planned::format_planned_list;
