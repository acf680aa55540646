//! Planned purchase service

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseCategory, Money, PlannedPurchase, PlannedPurchaseId};
use crate::storage::Storage;

/// Service for the planned purchase wishlist
pub struct PlannedPurchaseService<'a> {
    storage: &'a Storage,
}

impl<'a> PlannedPurchaseService<'a> {
    /// Create a new planned purchase service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a planned purchase
    pub fn add(
        &self,
        name: &str,
        price: Money,
        category: ExpenseCategory,
    ) -> FintrackResult<PlannedPurchase> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FintrackError::Validation(
                "Planned purchase name cannot be empty".into(),
            ));
        }

        if price.is_negative() {
            return Err(FintrackError::InvalidAmount { amount: price });
        }

        let planned = PlannedPurchase::new(name, price, category);
        planned
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.planned.upsert(planned.clone())?;
        self.storage.planned.save()?;

        Ok(planned)
    }

    /// List all planned purchases in creation order
    pub fn list(&self) -> FintrackResult<Vec<PlannedPurchase>> {
        self.storage.planned.get_all()
    }

    /// Remove a planned purchase
    pub fn remove(&self, id: PlannedPurchaseId) -> FintrackResult<PlannedPurchase> {
        let planned = self
            .storage
            .planned
            .get(id)?
            .ok_or_else(|| FintrackError::planned_purchase_not_found(id.to_string()))?;

        self.storage.planned.delete(id)?;
        self.storage.planned.save()?;

        Ok(planned)
    }

    /// Total expected cost of the wishlist
    pub fn total(&self) -> FintrackResult<Money> {
        Ok(self.list()?.iter().map(|p| p.price).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_total() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PlannedPurchaseService::new(&storage);

        service
            .add("Desk", Money::new(dec!(120.00)), ExpenseCategory::Undefined)
            .unwrap();
        service
            .add("Trip", Money::new(dec!(800.00)), ExpenseCategory::Trip)
            .unwrap();

        assert_eq!(service.list().unwrap().len(), 2);
        assert_eq!(service.total().unwrap(), Money::new(dec!(920.00)));
    }

    #[test]
    fn test_add_negative_price_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PlannedPurchaseService::new(&storage);

        let result = service.add("Desk", Money::new(dec!(-1.00)), ExpenseCategory::Undefined);
        assert!(matches!(result, Err(FintrackError::InvalidAmount { .. })));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PlannedPurchaseService::new(&storage);

        let planned = service
            .add("Desk", Money::new(dec!(120.00)), ExpenseCategory::Undefined)
            .unwrap();

        service.remove(planned.id).unwrap();
        assert!(service.list().unwrap().is_empty());

        let result = service.remove(planned.id);
        assert!(matches!(result, Err(FintrackError::NotFound { .. })));
    }
}
