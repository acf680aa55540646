//! Saving goal service
//!
//! Provides business logic for saving goals: creation against an existing
//! account, derived progress, target edits, and deletion with cascade of
//! the goal's private ledger.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    AccountId, GoalId, Money, Operation, OperationId, OperationOwner, SavingGoal,
};
use crate::storage::Storage;

/// Service for saving goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// A goal with its derived progress figures
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub goal: SavingGoal,
    /// Signed sum over the goal's private ledger
    pub current_amount: Money,
    /// `target - current`; negative when over-funded
    pub progress_amount: Money,
    /// `current / target`, 0 when the target is not positive; unclamped
    pub progress_fraction: f64,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a saving goal against an existing account
    ///
    /// Fails with `InvalidTarget` unless the target is positive.
    pub fn create(
        &self,
        name: &str,
        target_amount: Money,
        account_id: AccountId,
    ) -> FintrackResult<SavingGoal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FintrackError::Validation("Goal name cannot be empty".into()));
        }

        if !self.storage.accounts.exists(account_id)? {
            return Err(FintrackError::account_not_found(account_id.to_string()));
        }

        if !target_amount.is_positive() {
            return Err(FintrackError::InvalidTarget {
                target: target_amount,
            });
        }

        // One name per account
        if self
            .storage
            .goals
            .get_by_name(account_id, name)?
            .is_some()
        {
            return Err(FintrackError::Duplicate {
                entity_type: "Saving goal",
                identifier: name.to_string(),
            });
        }

        let goal = SavingGoal::new(name, target_amount, account_id);
        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> FintrackResult<Option<SavingGoal>> {
        self.storage.goals.get(id)
    }

    /// Find a goal of an account by name or ID string
    pub fn find(&self, account_id: AccountId, identifier: &str) -> FintrackResult<Option<SavingGoal>> {
        if let Some(goal) = self.storage.goals.get_by_name(account_id, identifier)? {
            return Ok(Some(goal));
        }

        if let Ok(id) = identifier.parse::<GoalId>() {
            return self.storage.goals.get(id);
        }

        Ok(None)
    }

    /// List the goals of an account
    pub fn list(&self, account_id: AccountId) -> FintrackResult<Vec<SavingGoal>> {
        if !self.storage.accounts.exists(account_id)? {
            return Err(FintrackError::account_not_found(account_id.to_string()));
        }

        self.storage.goals.get_by_account(account_id)
    }

    /// The amount saved so far: signed sum over the goal's private ledger
    pub fn current_amount(&self, goal_id: GoalId) -> FintrackResult<Money> {
        if self.storage.goals.get(goal_id)?.is_none() {
            return Err(FintrackError::goal_not_found(goal_id.to_string()));
        }

        let operations = self
            .storage
            .operations
            .get_by_owner(OperationOwner::Goal(goal_id))?;

        Ok(operations.iter().map(Operation::signed_amount).sum())
    }

    /// Derived progress for one goal
    pub fn progress(&self, goal_id: GoalId) -> FintrackResult<GoalProgress> {
        let goal = self
            .storage
            .goals
            .get(goal_id)?
            .ok_or_else(|| FintrackError::goal_not_found(goal_id.to_string()))?;

        let current_amount = self.current_amount(goal_id)?;

        Ok(GoalProgress {
            progress_amount: goal.progress_amount(current_amount),
            progress_fraction: goal.progress_fraction(current_amount),
            current_amount,
            goal,
        })
    }

    /// Derived progress for every goal of an account
    pub fn list_with_progress(&self, account_id: AccountId) -> FintrackResult<Vec<GoalProgress>> {
        let goals = self.list(account_id)?;
        let mut progresses = Vec::with_capacity(goals.len());

        for goal in goals {
            progresses.push(self.progress(goal.id)?);
        }

        Ok(progresses)
    }

    /// Change a goal's target
    ///
    /// The same `InvalidTarget` rule as creation applies.
    pub fn set_target(&self, goal_id: GoalId, target_amount: Money) -> FintrackResult<SavingGoal> {
        let mut goal = self
            .storage
            .goals
            .get(goal_id)?
            .ok_or_else(|| FintrackError::goal_not_found(goal_id.to_string()))?;

        if !target_amount.is_positive() {
            return Err(FintrackError::InvalidTarget {
                target: target_amount,
            });
        }

        goal.target_amount = target_amount;
        goal.updated_at = chrono::Utc::now();

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// Delete a goal, detaching it from its account and cascading its
    /// private ledger. Returns the removed operation identities.
    pub fn delete(&self, goal_id: GoalId) -> FintrackResult<Vec<OperationId>> {
        if self.storage.goals.get(goal_id)?.is_none() {
            return Err(FintrackError::goal_not_found(goal_id.to_string()));
        }

        let removed = self
            .storage
            .operations
            .delete_by_owner(OperationOwner::Goal(goal_id))?;
        self.storage.goals.delete(goal_id)?;

        self.storage.goals.save()?;
        self.storage.operations.save()?;

        Ok(removed)
    }
}
