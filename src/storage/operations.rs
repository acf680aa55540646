//! Operation repository for JSON storage
//!
//! Manages loading and saving operations to operations.json. Operations are
//! indexed by their owning ledger (account or goal) and kept in insertion
//! order; display-order sorting is the presentation layer's job.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Operation, OperationId, OperationOwner};

use super::file_io::{read_json, write_json_atomic};

/// Serializable operation data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct OperationData {
    operations: Vec<Operation>,
}

/// Repository for operation persistence with a by-owner index
pub struct OperationRepository {
    path: PathBuf,
    data: RwLock<HashMap<OperationId, Operation>>,
    /// Index: owner -> operation_ids, in insertion order
    by_owner: RwLock<HashMap<OperationOwner, Vec<OperationId>>>,
}

impl OperationRepository {
    /// Create a new operation repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load operations from disk and build the owner index
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: OperationData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_owner.clear();

        for op in file_data.operations {
            by_owner.entry(op.owner).or_default().push(op.id);
            data.insert(op.id, op);
        }

        Ok(())
    }

    /// Save operations to disk
    ///
    /// Records are persisted in insertion order (`created_at` ascending) so
    /// a reload rebuilds the same index order.
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut operations: Vec<_> = data.values().cloned().collect();
        operations.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = OperationData { operations };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an operation by ID
    pub fn get(&self, id: OperationId) -> Result<Option<Operation>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all operations in insertion order
    pub fn get_all(&self) -> Result<Vec<Operation>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut operations: Vec<_> = data.values().cloned().collect();
        operations.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(operations)
    }

    /// Get the operations of one ledger, in insertion order
    pub fn get_by_owner(&self, owner: OperationOwner) -> Result<Vec<Operation>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_owner = self
            .by_owner
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_owner.get(&owner).map(|v| v.as_slice()).unwrap_or(&[]);
        Ok(ids.iter().filter_map(|id| data.get(id).cloned()).collect())
    }

    /// Get the operation identities of one ledger, in insertion order
    pub fn ids_by_owner(&self, owner: OperationOwner) -> Result<Vec<OperationId>, FintrackError> {
        let by_owner = self
            .by_owner
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_owner.get(&owner).cloned().unwrap_or_default())
    }

    /// Insert or update an operation
    pub fn upsert(&self, op: Operation) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.get(&op.id) {
            // Updates keep their place in the ledger; ownership never moves
            // in practice, but a changed owner is re-indexed defensibly.
            Some(old) if old.owner != op.owner => {
                if let Some(ids) = by_owner.get_mut(&old.owner) {
                    ids.retain(|&id| id != op.id);
                }
                by_owner.entry(op.owner).or_default().push(op.id);
            }
            Some(_) => {}
            None => {
                by_owner.entry(op.owner).or_default().push(op.id);
            }
        }

        data.insert(op.id, op);
        Ok(())
    }

    /// Insert two operations under a single write-lock acquisition
    ///
    /// This is the commit point of the allocation protocol: the mirrored
    /// account/goal records become visible together, so no reader can
    /// observe a state where only one side of the transfer exists.
    pub fn insert_pair(&self, first: Operation, second: Operation) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        for op in [first, second] {
            by_owner.entry(op.owner).or_default().push(op.id);
            data.insert(op.id, op);
        }

        Ok(())
    }

    /// Delete an operation
    pub fn delete(&self, id: OperationId) -> Result<bool, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(op) = data.remove(&id) {
            if let Some(ids) = by_owner.get_mut(&op.owner) {
                ids.retain(|&oid| oid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Delete all operations of one ledger, returning the removed identities
    pub fn delete_by_owner(
        &self,
        owner: OperationOwner,
    ) -> Result<Vec<OperationId>, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_owner = self
            .by_owner
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let ids = by_owner.remove(&owner).unwrap_or_default();
        for id in &ids {
            data.remove(id);
        }

        Ok(ids)
    }

    /// Count operations
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AccountId, ExpenseCategory, GoalId, IncomeCategory, Money, OperationKind,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, OperationRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("operations.json");
        let repo = OperationRepository::new(path);
        (temp_dir, repo)
    }

    fn income_op(owner: OperationOwner, amount: Money) -> Operation {
        Operation::new(
            owner,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            amount,
            OperationKind::Income(IncomeCategory::Undefined),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get_by_owner() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = OperationOwner::Account(AccountId::new());
        let other = OperationOwner::Account(AccountId::new());

        let op1 = income_op(account, Money::new(dec!(1.00)));
        let op2 = income_op(account, Money::new(dec!(2.00)));
        let op3 = income_op(other, Money::new(dec!(3.00)));

        repo.upsert(op1.clone()).unwrap();
        repo.upsert(op2.clone()).unwrap();
        repo.upsert(op3).unwrap();

        let ops = repo.get_by_owner(account).unwrap();
        assert_eq!(ops.len(), 2);
        // Insertion order preserved
        assert_eq!(ops[0].id, op1.id);
        assert_eq!(ops[1].id, op2.id);
    }

    #[test]
    fn test_update_keeps_position() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = OperationOwner::Account(AccountId::new());
        let op1 = income_op(account, Money::new(dec!(1.00)));
        let op2 = income_op(account, Money::new(dec!(2.00)));
        let first_id = op1.id;

        repo.upsert(op1.clone()).unwrap();
        repo.upsert(op2).unwrap();

        let mut edited = op1;
        edited.amount = Money::new(dec!(9.00));
        repo.upsert(edited).unwrap();

        let ops = repo.get_by_owner(account).unwrap();
        assert_eq!(ops[0].id, first_id);
        assert_eq!(ops[0].amount, Money::new(dec!(9.00)));
    }

    #[test]
    fn test_insert_pair() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = OperationOwner::Account(AccountId::new());
        let goal = OperationOwner::Goal(GoalId::new());

        let account_op = Operation::new(
            account,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::new(dec!(40.00)),
            OperationKind::Expense(ExpenseCategory::Saving),
        );
        let goal_op = income_op(goal, Money::new(dec!(40.00)));

        repo.insert_pair(account_op.clone(), goal_op.clone()).unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(repo.get_by_owner(account).unwrap()[0].id, account_op.id);
        assert_eq!(repo.get_by_owner(goal).unwrap()[0].id, goal_op.id);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = OperationOwner::Account(AccountId::new());
        let op = income_op(account, Money::new(dec!(1.00)));
        let id = op.id;

        repo.upsert(op).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert!(repo.get_by_owner(account).unwrap().is_empty());
    }

    #[test]
    fn test_delete_by_owner() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = OperationOwner::Account(AccountId::new());
        let other = OperationOwner::Account(AccountId::new());

        repo.upsert(income_op(account, Money::new(dec!(1.00)))).unwrap();
        repo.upsert(income_op(account, Money::new(dec!(2.00)))).unwrap();
        repo.upsert(income_op(other, Money::new(dec!(3.00)))).unwrap();

        let removed = repo.delete_by_owner(account).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.get_by_owner(account).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = OperationOwner::Account(AccountId::new());
        let op1 = income_op(account, Money::new(dec!(1.00)));
        let op2 = income_op(account, Money::new(dec!(2.00)));
        let ids: Vec<_> = vec![op1.id, op2.id];

        repo.upsert(op1).unwrap();
        repo.upsert(op2).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("operations.json");
        let repo2 = OperationRepository::new(path);
        repo2.load().unwrap();

        let loaded: Vec<_> = repo2
            .get_by_owner(account)
            .unwrap()
            .into_iter()
            .map(|op| op.id)
            .collect();
        assert_eq!(loaded, ids);
    }
}
