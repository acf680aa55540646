//! Allocation service
//!
//! Moves funds from an account into one of its saving goals. An allocation
//! is the one operation that touches two ledgers at once: it appends a
//! saving expense to the account's ledger and a mirrored income to the
//! goal's private ledger. Two records, not one shared row, so each side's
//! balance stays a local sum over its own collection.
//!
//! All mutation here is single-threaded, like the rest of the crate. A
//! deployment exposing this service to concurrent callers must wrap each
//! whole check-then-append sequence in an exclusive section scoped to the
//! (account, goal) pair; otherwise two racing allocations could both pass
//! the funds check and overdraw the account. The paired repository insert
//! already guarantees no reader ever observes only one half.

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    AccountId, ExpenseCategory, GoalId, IncomeCategory, Money, Operation, OperationKind,
    OperationOwner,
};
use crate::storage::Storage;

/// Service for moving funds between an account and its saving goals
pub struct AllocationService<'a> {
    storage: &'a Storage,
}

/// Result of an allocation or deallocation
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// The operation appended to the account's ledger
    pub account_operation: Operation,
    /// The mirrored operation appended to the goal's private ledger
    pub goal_operation: Operation,
}

impl<'a> AllocationService<'a> {
    /// Create a new allocation service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Allocate funds from an account into one of its saving goals
    ///
    /// Preconditions, checked in this order for deterministic error
    /// reporting:
    /// 1. the goal belongs to the account (`InvalidGoal`);
    /// 2. the account's derived balance covers the amount
    ///    (`InsufficientFunds`);
    /// 3. the amount is non-negative (`InvalidAmount`).
    ///
    /// On success both halves are committed together: an
    /// `Expense(Saving)` on the account and an `Income(Undefined)` on the
    /// goal, both dated `when`.
    pub fn allocate(
        &self,
        account_id: AccountId,
        goal_id: GoalId,
        amount: Money,
        when: NaiveDate,
    ) -> FintrackResult<AllocationResult> {
        let account = self
            .storage
            .accounts
            .get(account_id)?
            .ok_or_else(|| FintrackError::account_not_found(account_id.to_string()))?;

        let goal = self
            .storage
            .goals
            .get(goal_id)?
            .ok_or_else(|| FintrackError::goal_not_found(goal_id.to_string()))?;

        if goal.account_id != account.id {
            return Err(FintrackError::InvalidGoal {
                goal: goal.name.clone(),
                account: account.name.clone(),
            });
        }

        let available = self.balance_of(account_id)?;
        if available < amount {
            return Err(FintrackError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        if amount.is_negative() {
            return Err(FintrackError::InvalidAmount { amount });
        }

        let account_op = Operation::new(
            OperationOwner::Account(account_id),
            when,
            amount,
            OperationKind::Expense(ExpenseCategory::Saving),
        );
        let goal_op = Operation::new(
            OperationOwner::Goal(goal_id),
            when,
            amount,
            OperationKind::Income(IncomeCategory::Undefined),
        );

        self.commit_pair(account_op, goal_op)
    }

    /// Return funds from a saving goal back to its account
    ///
    /// The exact inverse pair of `allocate`, with symmetric guards: the
    /// goal must belong to the account, the goal's saved amount must cover
    /// the withdrawal, and the amount must be non-negative.
    pub fn deallocate(
        &self,
        account_id: AccountId,
        goal_id: GoalId,
        amount: Money,
        when: NaiveDate,
    ) -> FintrackResult<AllocationResult> {
        let account = self
            .storage
            .accounts
            .get(account_id)?
            .ok_or_else(|| FintrackError::account_not_found(account_id.to_string()))?;

        let goal = self
            .storage
            .goals
            .get(goal_id)?
            .ok_or_else(|| FintrackError::goal_not_found(goal_id.to_string()))?;

        if goal.account_id != account.id {
            return Err(FintrackError::InvalidGoal {
                goal: goal.name.clone(),
                account: account.name.clone(),
            });
        }

        let saved = self.saved_in(goal_id)?;
        if saved < amount {
            return Err(FintrackError::InsufficientFunds {
                requested: amount,
                available: saved,
            });
        }

        if amount.is_negative() {
            return Err(FintrackError::InvalidAmount { amount });
        }

        let account_op = Operation::new(
            OperationOwner::Account(account_id),
            when,
            amount,
            OperationKind::Income(IncomeCategory::Undefined),
        );
        let goal_op = Operation::new(
            OperationOwner::Goal(goal_id),
            when,
            amount,
            OperationKind::Expense(ExpenseCategory::Saving),
        );

        self.commit_pair(account_op, goal_op)
    }

    /// Stage both halves and commit them as one: a single paired insert
    /// under one write lock, then a single save.
    fn commit_pair(
        &self,
        account_op: Operation,
        goal_op: Operation,
    ) -> FintrackResult<AllocationResult> {
        account_op
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        goal_op
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage
            .operations
            .insert_pair(account_op.clone(), goal_op.clone())?;
        self.storage.operations.save()?;

        Ok(AllocationResult {
            account_operation: account_op,
            goal_operation: goal_op,
        })
    }

    /// The account's derived balance at this moment
    fn balance_of(&self, account_id: AccountId) -> FintrackResult<Money> {
        let operations = self
            .storage
            .operations
            .get_by_owner(OperationOwner::Account(account_id))?;
        Ok(operations.iter().map(Operation::signed_amount).sum())
    }

    /// The goal's derived saved amount at this moment
    fn saved_in(&self, goal_id: GoalId) -> FintrackResult<Money> {
        let operations = self
            .storage
            .operations
            .get_by_owner(OperationOwner::Goal(goal_id))?;
        Ok(operations.iter().map(Operation::signed_amount).sum())
    }
}
