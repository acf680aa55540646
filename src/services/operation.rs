//! Operation service
//!
//! Provides business logic for recording, editing, and removing operations
//! on an account's ledger. Goal ledgers are not edited here: their records
//! exist only as halves of allocations and are managed by the allocation
//! service.

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::operation::OperationValidationError;
use crate::models::{
    AccountId, Money, Operation, OperationId, OperationKind, OperationOwner, OperationUpdate,
};
use crate::storage::Storage;

/// Service for operation management
pub struct OperationService<'a> {
    storage: &'a Storage,
}

impl<'a> OperationService<'a> {
    /// Create a new operation service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new operation on an account's ledger
    ///
    /// Fails with `InvalidAmount` for a negative magnitude. There is no
    /// balance check: accounts may go overdrawn through ordinary
    /// operations; only allocations guard funds.
    pub fn add(
        &self,
        account_id: AccountId,
        date: NaiveDate,
        amount: Money,
        kind: OperationKind,
    ) -> FintrackResult<Operation> {
        if !self.storage.accounts.exists(account_id)? {
            return Err(FintrackError::account_not_found(account_id.to_string()));
        }

        if amount.is_negative() {
            return Err(FintrackError::InvalidAmount { amount });
        }

        let op = Operation::new(OperationOwner::Account(account_id), date, amount, kind);
        op.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.operations.upsert(op.clone())?;
        self.storage.operations.save()?;

        Ok(op)
    }

    /// Get an operation by ID
    pub fn get(&self, id: OperationId) -> FintrackResult<Option<Operation>> {
        self.storage.operations.get(id)
    }

    /// List an account's operations in insertion order
    pub fn list(&self, account_id: AccountId) -> FintrackResult<Vec<Operation>> {
        if !self.storage.accounts.exists(account_id)? {
            return Err(FintrackError::account_not_found(account_id.to_string()));
        }

        self.storage
            .operations
            .get_by_owner(OperationOwner::Account(account_id))
    }

    /// List a goal's private operations in insertion order
    pub fn list_for_goal(
        &self,
        goal_id: crate::models::GoalId,
    ) -> FintrackResult<Vec<Operation>> {
        if self.storage.goals.get(goal_id)?.is_none() {
            return Err(FintrackError::goal_not_found(goal_id.to_string()));
        }

        self.storage
            .operations
            .get_by_owner(OperationOwner::Goal(goal_id))
    }

    /// Apply a partial edit to an operation
    ///
    /// The amount invariant is re-validated before any field changes, so a
    /// rejected edit leaves the record untouched.
    pub fn update(&self, id: OperationId, update: OperationUpdate) -> FintrackResult<Operation> {
        let mut op = self
            .storage
            .operations
            .get(id)?
            .ok_or_else(|| FintrackError::operation_not_found(id.to_string()))?;

        self.ensure_account_owned(&op)?;

        op.apply(update).map_err(|e| match e {
            OperationValidationError::NegativeAmount(amount) => {
                FintrackError::InvalidAmount { amount }
            }
        })?;

        self.storage.operations.upsert(op.clone())?;
        self.storage.operations.save()?;

        Ok(op)
    }

    /// Remove an operation from its account's ledger
    ///
    /// Referencing an absent identity is a `NotFound` error, never a silent
    /// no-op. The synthetic opening-deposit operation is removable like any
    /// other record.
    pub fn remove(&self, id: OperationId) -> FintrackResult<Operation> {
        let op = self
            .storage
            .operations
            .get(id)?
            .ok_or_else(|| FintrackError::operation_not_found(id.to_string()))?;

        self.ensure_account_owned(&op)?;

        self.storage.operations.delete(id)?;
        self.storage.operations.save()?;

        Ok(op)
    }

    /// Direct edits are limited to account ledgers; a goal's records only
    /// change through allocate/deallocate, which keeps the mirrored pairs
    /// consistent.
    fn ensure_account_owned(&self, op: &Operation) -> FintrackResult<()> {
        match op.owner {
            OperationOwner::Account(_) => Ok(()),
            OperationOwner::Goal(_) => Err(FintrackError::Validation(
                "Goal ledger operations are managed through allocate/deallocate".into(),
            )),
        }
    }
}
