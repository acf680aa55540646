//! Saving goal model
//!
//! A saving goal is a small ledger of its own, scoped to a single account.
//! It keeps a private operation history and derives how far along it is
//! toward a target amount. The back-reference to the account is a plain
//! lookup key: a goal never outlives or mutates its account.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, GoalId};
use super::money::Money;

/// A savings target funded from one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingGoal {
    /// Unique identifier
    pub id: GoalId,

    /// The account this goal belongs to; fixed at creation
    pub account_id: AccountId,

    /// Goal name (e.g., "New Car")
    pub name: String,

    /// The amount being saved toward; always positive
    pub target_amount: Money,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl SavingGoal {
    /// Create a new saving goal against an account
    pub fn new(name: impl Into<String>, target_amount: Money, account_id: AccountId) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            account_id,
            name: name.into(),
            target_amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Remaining amount to the target: `target - current`
    ///
    /// Negative when the goal is over-funded.
    pub fn progress_amount(&self, current_amount: Money) -> Money {
        self.target_amount - current_amount
    }

    /// Fraction of the target reached: `current / target`
    ///
    /// Defined as 0 when the target is not positive. Not clamped; display
    /// code decides how to render over-funded goals.
    pub fn progress_fraction(&self, current_amount: Money) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }

        (current_amount.amount() / self.target_amount.amount())
            .to_f64()
            .unwrap_or(0.0)
    }

    /// Check whether the target has been reached
    pub fn is_reached(&self, current_amount: Money) -> bool {
        current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(GoalValidationError::NameTooLong(self.name.len()));
        }

        if self.target_amount.amount() <= Decimal::ZERO {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        Ok(())
    }
}

impl fmt::Display for SavingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (target {})", self.name, self.target_amount)
    }
}

/// Validation errors for saving goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Goal name too long ({} chars, max 100)", len)
            }
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be positive (got {})", target)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_goal(target: Money) -> SavingGoal {
        SavingGoal::new("New Car", target, AccountId::new())
    }

    #[test]
    fn test_new_goal() {
        let account_id = AccountId::new();
        let goal = SavingGoal::new("Vacation", Money::new(dec!(500.00)), account_id);

        assert_eq!(goal.name, "Vacation");
        assert_eq!(goal.account_id, account_id);
        assert_eq!(goal.target_amount, Money::new(dec!(500.00)));
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_progress_amount() {
        let goal = test_goal(Money::new(dec!(50.00)));

        assert_eq!(
            goal.progress_amount(Money::new(dec!(40.00))),
            Money::new(dec!(10.00))
        );
        // Over-funded goals report a negative remainder
        assert_eq!(
            goal.progress_amount(Money::new(dec!(60.00))),
            Money::new(dec!(-10.00))
        );
    }

    #[test]
    fn test_progress_fraction() {
        let goal = test_goal(Money::new(dec!(50.00)));

        assert_eq!(goal.progress_fraction(Money::zero()), 0.0);
        assert_eq!(goal.progress_fraction(Money::new(dec!(25.00))), 0.5);
        assert_eq!(goal.progress_fraction(Money::new(dec!(50.00))), 1.0);
        // Not clamped
        assert_eq!(goal.progress_fraction(Money::new(dec!(100.00))), 2.0);
    }

    #[test]
    fn test_progress_fraction_zero_target() {
        let goal = test_goal(Money::zero());
        assert_eq!(goal.progress_fraction(Money::new(dec!(10.00))), 0.0);
    }

    #[test]
    fn test_is_reached() {
        let goal = test_goal(Money::new(dec!(50.00)));
        assert!(!goal.is_reached(Money::new(dec!(49.99))));
        assert!(goal.is_reached(Money::new(dec!(50.00))));
        assert!(goal.is_reached(Money::new(dec!(51.00))));
    }

    #[test]
    fn test_validation() {
        let mut goal = test_goal(Money::new(dec!(50.00)));
        assert!(goal.validate().is_ok());

        goal.name = String::new();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        goal.name = "Valid".to_string();
        goal.target_amount = Money::zero();
        assert_eq!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(Money::zero()))
        );

        goal.target_amount = Money::new(dec!(-10.00));
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let goal = test_goal(Money::new(dec!(50.00)));
        let json = serde_json::to_string(&goal).unwrap();
        let deserialized: SavingGoal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal.id, deserialized.id);
        assert_eq!(goal.account_id, deserialized.account_id);
        assert_eq!(goal.target_amount, deserialized.target_amount);
    }
}
