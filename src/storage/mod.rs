//! Storage layer for fintrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The ledger core treats this layer as a black-box object store:
//! repositories offer create/update/delete/query-by-type and nothing else.

pub mod accounts;
pub mod file_io;
pub mod goals;
pub mod operations;
pub mod planned;

pub use accounts::AccountRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use operations::OperationRepository;
pub use planned::PlannedPurchaseRepository;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FintrackPaths,
    pub accounts: AccountRepository,
    pub operations: OperationRepository,
    pub goals: GoalRepository,
    pub planned: PlannedPurchaseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            operations: OperationRepository::new(paths.operations_file()),
            goals: GoalRepository::new(paths.goals_file()),
            planned: PlannedPurchaseRepository::new(paths.planned_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.accounts.load()?;
        self.operations.load()?;
        self.goals.load()?;
        self.planned.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.accounts.save()?;
        self.operations.save()?;
        self.goals.save()?;
        self.planned.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
