//! Operation categories
//!
//! Closed enumerations identifying why money moved. The income/expense tag
//! determines sign semantics; the category never does. Display labels and
//! icons are presentation metadata colocated here because the rest of the
//! crate treats categories as opaque identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why money came in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Salary,
    Gift,
    Interest,
    #[default]
    Undefined,
}

impl IncomeCategory {
    /// All income categories in display order
    pub fn all() -> &'static [Self] {
        &[Self::Salary, Self::Gift, Self::Interest, Self::Undefined]
    }

    /// Parse an income category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "salary" => Some(Self::Salary),
            "gift" => Some(Self::Gift),
            "interest" => Some(Self::Interest),
            "undefined" | "other" => Some(Self::Undefined),
            _ => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Gift => "Gift",
            Self::Interest => "Interest",
            Self::Undefined => "Other",
        }
    }

    /// Display icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Salary => "💼",
            Self::Gift => "🎁",
            Self::Interest => "🏦",
            Self::Undefined => "•",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Why money went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Rent,
    Gift,
    Saving,
    Trip,
    #[default]
    Undefined,
}

impl ExpenseCategory {
    /// All expense categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Rent,
            Self::Gift,
            Self::Saving,
            Self::Trip,
            Self::Undefined,
        ]
    }

    /// Parse an expense category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "rent" => Some(Self::Rent),
            "gift" => Some(Self::Gift),
            "saving" | "savings" => Some(Self::Saving),
            "trip" | "travel" => Some(Self::Trip),
            "undefined" | "other" => Some(Self::Undefined),
            _ => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Gift => "Gift",
            Self::Saving => "Saving",
            Self::Trip => "Trip",
            Self::Undefined => "Other",
        }
    }

    /// Display icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍽",
            Self::Rent => "🏠",
            Self::Gift => "🎁",
            Self::Saving => "🎯",
            Self::Trip => "✈",
            Self::Undefined => "•",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The direction of a money movement, parameterized by its category
///
/// Direction lives only in this tag. Every sign-sensitive computation
/// matches on it exhaustively, so a new category can never silently
/// break sign logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "direction", content = "category", rename_all = "lowercase")]
pub enum OperationKind {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl OperationKind {
    /// Check if this is an income kind
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income(_))
    }

    /// Check if this is an expense kind
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense(_))
    }

    /// Parse a kind from a string
    ///
    /// Accepts "income", "expense", or "direction:category" pairs such as
    /// "income:salary" and "expense:food". A bare direction gets the
    /// undefined category.
    pub fn parse(s: &str) -> Option<Self> {
        let (direction, category) = match s.split_once(':') {
            Some((d, c)) => (d.trim(), Some(c.trim())),
            None => (s.trim(), None),
        };

        match direction.to_lowercase().as_str() {
            "income" | "in" => {
                let category = match category {
                    Some(c) => IncomeCategory::parse(c)?,
                    None => IncomeCategory::Undefined,
                };
                Some(Self::Income(category))
            }
            "expense" | "out" => {
                let category = match category {
                    Some(c) => ExpenseCategory::parse(c)?,
                    None => ExpenseCategory::Undefined,
                };
                Some(Self::Expense(category))
            }
            _ => None,
        }
    }

    /// Display icon for the kind's category
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Income(category) => category.icon(),
            Self::Expense(category) => category.icon(),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income(category) => write!(f, "Income ({})", category),
            Self::Expense(category) => write!(f, "Expense ({})", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_category_parse() {
        assert_eq!(IncomeCategory::parse("salary"), Some(IncomeCategory::Salary));
        assert_eq!(IncomeCategory::parse("SALARY"), Some(IncomeCategory::Salary));
        assert_eq!(
            IncomeCategory::parse("other"),
            Some(IncomeCategory::Undefined)
        );
        assert_eq!(IncomeCategory::parse("rent"), None);
    }

    #[test]
    fn test_expense_category_parse() {
        assert_eq!(ExpenseCategory::parse("food"), Some(ExpenseCategory::Food));
        assert_eq!(
            ExpenseCategory::parse("savings"),
            Some(ExpenseCategory::Saving)
        );
        assert_eq!(ExpenseCategory::parse("salary"), None);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            OperationKind::parse("income:salary"),
            Some(OperationKind::Income(IncomeCategory::Salary))
        );
        assert_eq!(
            OperationKind::parse("expense:food"),
            Some(OperationKind::Expense(ExpenseCategory::Food))
        );
        assert_eq!(
            OperationKind::parse("income"),
            Some(OperationKind::Income(IncomeCategory::Undefined))
        );
        assert_eq!(
            OperationKind::parse("Expense : Trip"),
            Some(OperationKind::Expense(ExpenseCategory::Trip))
        );
        assert_eq!(OperationKind::parse("income:food"), None);
        assert_eq!(OperationKind::parse("transfer"), None);
    }

    #[test]
    fn test_kind_direction() {
        assert!(OperationKind::Income(IncomeCategory::Salary).is_income());
        assert!(OperationKind::Expense(ExpenseCategory::Rent).is_expense());
        assert!(!OperationKind::Expense(ExpenseCategory::Rent).is_income());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", OperationKind::Income(IncomeCategory::Salary)),
            "Income (Salary)"
        );
        assert_eq!(
            format!("{}", OperationKind::Expense(ExpenseCategory::Undefined)),
            "Expense (Other)"
        );
    }

    #[test]
    fn test_serialization() {
        let kind = OperationKind::Expense(ExpenseCategory::Saving);
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, r#"{"direction":"expense","category":"saving"}"#);

        let deserialized: OperationKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }
}
