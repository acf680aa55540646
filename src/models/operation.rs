//! Operation model
//!
//! An operation is one recorded money movement inside a single ledger:
//! either an account's own history or a saving goal's private history.
//! Magnitudes are always non-negative; direction comes from the kind.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::OperationKind;
use super::ids::{AccountId, GoalId, OperationId};
use super::money::Money;

/// The ledger an operation belongs to
///
/// Each operation is owned by exactly one ledger for its whole life. An
/// allocation creates two operations, one per ledger, rather than one
/// shared record, so every balance stays a local sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum OperationOwner {
    Account(AccountId),
    Goal(GoalId),
}

impl fmt::Display for OperationOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "{}", id),
            Self::Goal(id) => write!(f, "{}", id),
        }
    }
}

/// A single money movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier
    pub id: OperationId,

    /// The ledger this operation belongs to
    pub owner: OperationOwner,

    /// Calendar date of the movement (time of day is not significant)
    pub date: NaiveDate,

    /// Non-negative magnitude; direction is encoded solely by `kind`
    pub amount: Money,

    /// Direction and category of the movement
    pub kind: OperationKind,

    /// When the operation was recorded; preserves insertion order
    pub created_at: DateTime<Utc>,

    /// When the operation was last modified
    pub updated_at: DateTime<Utc>,
}

/// A partial edit to an operation
///
/// Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct OperationUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<Money>,
    pub kind: Option<OperationKind>,
}

impl Operation {
    /// Create a new operation
    ///
    /// Callers are responsible for rejecting negative amounts before
    /// constructing; `validate` re-checks the invariant.
    pub fn new(owner: OperationOwner, date: NaiveDate, amount: Money, kind: OperationKind) -> Self {
        let now = Utc::now();
        Self {
            id: OperationId::new(),
            owner,
            date,
            amount,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// The amount this operation contributes to its ledger's balance:
    /// positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            OperationKind::Income(_) => self.amount,
            OperationKind::Expense(_) => -self.amount,
        }
    }

    /// Apply a partial edit, validating before any field is touched
    ///
    /// A rejected edit leaves the operation exactly as it was; a partial
    /// edit can never leave a negative magnitude behind.
    pub fn apply(&mut self, update: OperationUpdate) -> Result<(), OperationValidationError> {
        if let Some(amount) = update.amount {
            if amount.is_negative() {
                return Err(OperationValidationError::NegativeAmount(amount));
            }
        }

        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        self.updated_at = Utc::now();

        Ok(())
    }

    /// Validate the operation
    pub fn validate(&self) -> Result<(), OperationValidationError> {
        if self.amount.is_negative() {
            return Err(OperationValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for OperationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Operation amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for OperationValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory};
    use rust_decimal_macros::dec;

    fn account_owner() -> OperationOwner {
        OperationOwner::Account(AccountId::new())
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_operation() {
        let owner = account_owner();
        let op = Operation::new(
            owner,
            test_date(),
            Money::new(dec!(30.00)),
            OperationKind::Income(IncomeCategory::Salary),
        );

        assert_eq!(op.owner, owner);
        assert_eq!(op.date, test_date());
        assert_eq!(op.amount, Money::new(dec!(30.00)));
        assert!(op.validate().is_ok());
    }

    #[test]
    fn test_signed_amount() {
        let income = Operation::new(
            account_owner(),
            test_date(),
            Money::new(dec!(30.00)),
            OperationKind::Income(IncomeCategory::Salary),
        );
        assert_eq!(income.signed_amount(), Money::new(dec!(30.00)));

        let expense = Operation::new(
            account_owner(),
            test_date(),
            Money::new(dec!(20.00)),
            OperationKind::Expense(ExpenseCategory::Food),
        );
        assert_eq!(expense.signed_amount(), Money::new(dec!(-20.00)));
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let op = Operation::new(
            account_owner(),
            test_date(),
            Money::new(dec!(-1.00)),
            OperationKind::Income(IncomeCategory::Undefined),
        );
        assert_eq!(
            op.validate(),
            Err(OperationValidationError::NegativeAmount(Money::new(
                dec!(-1.00)
            )))
        );
    }

    #[test]
    fn test_apply_update() {
        let mut op = Operation::new(
            account_owner(),
            test_date(),
            Money::new(dec!(30.00)),
            OperationKind::Income(IncomeCategory::Salary),
        );

        let new_date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        op.apply(OperationUpdate {
            date: Some(new_date),
            amount: Some(Money::new(dec!(45.00))),
            kind: None,
        })
        .unwrap();

        assert_eq!(op.date, new_date);
        assert_eq!(op.amount, Money::new(dec!(45.00)));
        assert_eq!(op.kind, OperationKind::Income(IncomeCategory::Salary));
    }

    #[test]
    fn test_apply_rejects_negative_without_mutating() {
        let mut op = Operation::new(
            account_owner(),
            test_date(),
            Money::new(dec!(30.00)),
            OperationKind::Income(IncomeCategory::Salary),
        );

        let new_date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let result = op.apply(OperationUpdate {
            date: Some(new_date),
            amount: Some(Money::new(dec!(-5.00))),
            kind: Some(OperationKind::Expense(ExpenseCategory::Food)),
        });

        assert!(result.is_err());
        // Nothing moved, not even the valid fields of the rejected edit
        assert_eq!(op.date, test_date());
        assert_eq!(op.amount, Money::new(dec!(30.00)));
        assert_eq!(op.kind, OperationKind::Income(IncomeCategory::Salary));
    }

    #[test]
    fn test_serialization() {
        let op = Operation::new(
            OperationOwner::Goal(GoalId::new()),
            test_date(),
            Money::new(dec!(12.34)),
            OperationKind::Expense(ExpenseCategory::Saving),
        );

        let json = serde_json::to_string(&op).unwrap();
        let deserialized: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(op.id, deserialized.id);
        assert_eq!(op.owner, deserialized.owner);
        assert_eq!(op.amount, deserialized.amount);
        assert_eq!(op.kind, deserialized.kind);
    }

    #[test]
    fn test_display() {
        let op = Operation::new(
            account_owner(),
            test_date(),
            Money::new(dec!(30.00)),
            OperationKind::Income(IncomeCategory::Salary),
        );
        assert_eq!(format!("{}", op), "2025-01-15 Income (Salary) 30.00");
    }
}
