//! Saving goal repository for JSON storage
//!
//! Manages loading and saving goals to goals.json, indexed by owning
//! account.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{AccountId, GoalId, SavingGoal};

use super::file_io::{read_json, write_json_atomic};

/// Serializable goal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<SavingGoal>,
}

/// Repository for saving goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, SavingGoal>>,
    /// Index: account_id -> goal_ids
    by_account: RwLock<HashMap<AccountId, Vec<GoalId>>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_account: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk and build the account index
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_account = self
            .by_account
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_account.clear();

        for goal in file_data.goals {
            by_account.entry(goal.account_id).or_default().push(goal.id);
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = GoalData { goals };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<SavingGoal>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all goals
    pub fn get_all(&self) -> Result<Vec<SavingGoal>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(goals)
    }

    /// Get the goals belonging to an account
    pub fn get_by_account(&self, account_id: AccountId) -> Result<Vec<SavingGoal>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_account = self
            .by_account
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_account
            .get(&account_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        Ok(ids.iter().filter_map(|id| data.get(id).cloned()).collect())
    }

    /// Get the goal identities belonging to an account
    pub fn ids_by_account(&self, account_id: AccountId) -> Result<Vec<GoalId>, FintrackError> {
        let by_account = self
            .by_account
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_account.get(&account_id).cloned().unwrap_or_default())
    }

    /// Get a goal of an account by name (case-insensitive)
    pub fn get_by_name(
        &self,
        account_id: AccountId,
        name: &str,
    ) -> Result<Option<SavingGoal>, FintrackError> {
        let goals = self.get_by_account(account_id)?;
        let name_lower = name.to_lowercase();
        Ok(goals
            .into_iter()
            .find(|g| g.name.to_lowercase() == name_lower))
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: SavingGoal) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_account = self
            .by_account
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Goals never move between accounts; only index first-time inserts
        if !data.contains_key(&goal.id) {
            by_account.entry(goal.account_id).or_default().push(goal.id);
        }

        data.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal, detaching it from its account's collection
    pub fn delete(&self, id: GoalId) -> Result<bool, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_account = self
            .by_account
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(goal) = data.remove(&id) {
            if let Some(ids) = by_account.get_mut(&goal.account_id) {
                ids.retain(|&gid| gid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count goals
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
