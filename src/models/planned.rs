//! Planned purchase model
//!
//! A wishlist entry: something the user intends to buy, with an expected
//! price and an expense category. Planned purchases have no ledger effect
//! until the user records the actual operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::PlannedPurchaseId;
use super::money::Money;

/// A purchase the user intends to make
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedPurchase {
    /// Unique identifier
    pub id: PlannedPurchaseId,

    /// What is being bought
    pub name: String,

    /// Expected expense category once purchased
    pub category: ExpenseCategory,

    /// Expected price; non-negative
    pub price: Money,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

impl PlannedPurchase {
    /// Create a new planned purchase
    pub fn new(name: impl Into<String>, price: Money, category: ExpenseCategory) -> Self {
        let now = Utc::now();
        Self {
            id: PlannedPurchaseId::new(),
            name: name.into(),
            category,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the planned purchase
    pub fn validate(&self) -> Result<(), PlannedPurchaseValidationError> {
        if self.name.trim().is_empty() {
            return Err(PlannedPurchaseValidationError::EmptyName);
        }

        if self.price.is_negative() {
            return Err(PlannedPurchaseValidationError::NegativePrice(self.price));
        }

        Ok(())
    }
}

impl fmt::Display for PlannedPurchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.category, self.price)
    }
}

/// Validation errors for planned purchases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedPurchaseValidationError {
    EmptyName,
    NegativePrice(Money),
}

impl fmt::Display for PlannedPurchaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Planned purchase name cannot be empty"),
            Self::NegativePrice(price) => {
                write!(f, "Planned purchase price cannot be negative (got {})", price)
            }
        }
    }
}

impl std::error::Error for PlannedPurchaseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_planned_purchase() {
        let planned = PlannedPurchase::new(
            "Espresso machine",
            Money::new(dec!(250.00)),
            ExpenseCategory::Undefined,
        );
        assert_eq!(planned.name, "Espresso machine");
        assert_eq!(planned.price, Money::new(dec!(250.00)));
        assert!(planned.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut planned =
            PlannedPurchase::new("Trip", Money::new(dec!(800.00)), ExpenseCategory::Trip);
        assert!(planned.validate().is_ok());

        planned.name = "  ".to_string();
        assert_eq!(
            planned.validate(),
            Err(PlannedPurchaseValidationError::EmptyName)
        );

        planned.name = "Trip".to_string();
        planned.price = Money::new(dec!(-1.00));
        assert!(matches!(
            planned.validate(),
            Err(PlannedPurchaseValidationError::NegativePrice(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let planned = PlannedPurchase::new("Desk", Money::new(dec!(120.00)), ExpenseCategory::Undefined);
        let json = serde_json::to_string(&planned).unwrap();
        let deserialized: PlannedPurchase = serde_json::from_str(&json).unwrap();
        assert_eq!(planned.id, deserialized.id);
        assert_eq!(planned.price, deserialized.price);
    }
}
