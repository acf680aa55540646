//! Account service
//!
//! Provides business logic for account management: creation with the
//! synthetic opening deposit, derived balances, renaming, and cascading
//! deletion.

use chrono::Utc;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Account, AccountId, GoalId, IncomeCategory, Money, Operation, OperationId, OperationKind,
    OperationOwner,
};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

/// Summary of an account with computed fields
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account: Account,
    /// Current balance, recomputed from the operation ledger
    pub balance: Money,
    /// Number of recorded operations
    pub operation_count: usize,
    /// Number of saving goals
    pub goal_count: usize,
}

/// The identities removed (or about to be removed) by an account cascade
///
/// `operations` includes both the account's own ledger and every owned
/// goal's private ledger, so an external store can mirror the whole
/// cascade in one step.
#[derive(Debug, Clone, Default)]
pub struct CascadeIds {
    pub operations: Vec<OperationId>,
    pub goals: Vec<GoalId>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account with a mandatory opening deposit
    ///
    /// The deposit is materialized as a synthetic first income operation
    /// dated today, so the balance never needs a stored field. A negative
    /// deposit is rejected with `InvalidAmount`; zero is fine.
    pub fn create(
        &self,
        name: &str,
        currency_code: &str,
        initial_deposit: Money,
    ) -> FintrackResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FintrackError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        if initial_deposit.is_negative() {
            return Err(FintrackError::InvalidAmount {
                amount: initial_deposit,
            });
        }

        // Check for duplicate name
        if self.storage.accounts.name_exists(name, None)? {
            return Err(FintrackError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let account = Account::new(name, currency_code);
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let seed = Operation::new(
            OperationOwner::Account(account.id),
            Utc::now().date_naive(),
            initial_deposit,
            OperationKind::Income(IncomeCategory::Undefined),
        );

        self.storage.accounts.upsert(account.clone())?;
        self.storage.operations.upsert(seed)?;
        self.storage.accounts.save()?;
        self.storage.operations.save()?;

        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> FintrackResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Account>> {
        // Try by name first
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<AccountId>() {
            return self.storage.accounts.get(id);
        }

        Ok(None)
    }

    /// Get all accounts
    pub fn list(&self) -> FintrackResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Get all accounts with their computed balances
    pub fn list_with_balances(&self) -> FintrackResult<Vec<AccountSummary>> {
        let accounts = self.list()?;
        let mut summaries = Vec::with_capacity(accounts.len());

        for account in accounts {
            let summary = self.get_summary(&account)?;
            summaries.push(summary);
        }

        Ok(summaries)
    }

    /// Get account summary with computed fields
    pub fn get_summary(&self, account: &Account) -> FintrackResult<AccountSummary> {
        let operations = self
            .storage
            .operations
            .get_by_owner(OperationOwner::Account(account.id))?;
        let goals = self.storage.goals.ids_by_account(account.id)?;

        let balance = operations.iter().map(Operation::signed_amount).sum();

        Ok(AccountSummary {
            account: account.clone(),
            balance,
            operation_count: operations.len(),
            goal_count: goals.len(),
        })
    }

    /// Calculate the current balance for an account
    ///
    /// A pure derived read: the signed sum over the account's operation
    /// ledger, recomputed on every call.
    pub fn balance(&self, account_id: AccountId) -> FintrackResult<Money> {
        if !self.storage.accounts.exists(account_id)? {
            return Err(FintrackError::account_not_found(account_id.to_string()));
        }

        let operations = self
            .storage
            .operations
            .get_by_owner(OperationOwner::Account(account_id))?;

        Ok(operations.iter().map(Operation::signed_amount).sum())
    }

    /// Rename an account (the one mutable label)
    pub fn rename(&self, id: AccountId, new_name: &str) -> FintrackResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| FintrackError::account_not_found(id.to_string()))?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(FintrackError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        // Check for duplicate name (excluding self)
        if self.storage.accounts.name_exists(new_name, Some(id))? {
            return Err(FintrackError::Duplicate {
                entity_type: "Account",
                identifier: new_name.to_string(),
            });
        }

        account.rename(new_name);
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        Ok(account)
    }

    /// The identities a deletion of this account would cascade to
    pub fn dependents(&self, account_id: AccountId) -> FintrackResult<CascadeIds> {
        if !self.storage.accounts.exists(account_id)? {
            return Err(FintrackError::account_not_found(account_id.to_string()));
        }

        let mut cascade = CascadeIds {
            operations: self
                .storage
                .operations
                .ids_by_owner(OperationOwner::Account(account_id))?,
            goals: self.storage.goals.ids_by_account(account_id)?,
        };

        for goal_id in &cascade.goals {
            let goal_ops = self
                .storage
                .operations
                .ids_by_owner(OperationOwner::Goal(*goal_id))?;
            cascade.operations.extend(goal_ops);
        }

        Ok(cascade)
    }

    /// Delete an account, cascading to everything it owns
    ///
    /// Removes the account's ledger, every saving goal, and each goal's
    /// private ledger. Returns the removed identities.
    pub fn delete(&self, account_id: AccountId) -> FintrackResult<CascadeIds> {
        let cascade = self.dependents(account_id)?;

        self.storage
            .operations
            .delete_by_owner(OperationOwner::Account(account_id))?;

        for goal_id in &cascade.goals {
            self.storage
                .operations
                .delete_by_owner(OperationOwner::Goal(*goal_id))?;
            self.storage.goals.delete(*goal_id)?;
        }

        self.storage.accounts.delete(account_id)?;

        self.storage.accounts.save()?;
        self.storage.operations.save()?;
        self.storage.goals.save()?;

        Ok(cascade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::ExpenseCategory;
    use chrono::NaiveDate;
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
    fn test_create_account_seeds_opening_deposit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create("Checking", "USD", Money::new(dec!(100.00)))
            .unwrap();

        assert_eq!(account.name, "Checking");
        assert_eq!(account.currency_code, "USD");

        // The deposit exists as a real first operation
        let ops = storage
            .operations
            .get_by_owner(OperationOwner::Account(account.id))
            .unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].amount, Money::new(dec!(100.00)));
        assert_eq!(
            ops[0].kind,
            OperationKind::Income(IncomeCategory::Undefined)
        );

        assert_eq!(
            service.balance(account.id).unwrap(),
            Money::new(dec!(100.00))
        );
    }

    #[test]
    fn test_create_account_zero_deposit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service.create("Empty", "USD", Money::zero()).unwrap();
        assert_eq!(service.balance(account.id).unwrap(), Money::zero());
    }

    #[test]
    fn test_create_account_negative_deposit_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let result = service.create("Checking", "USD", Money::new(dec!(-1.00)));
        assert!(matches!(
            result,
            Err(FintrackError::InvalidAmount { .. })
        ));
        assert_eq!(storage.accounts.count().unwrap(), 0);
        assert_eq!(storage.operations.count().unwrap(), 0);
    }

    #[test]
    fn test_create_duplicate_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        service.create("Checking", "USD", Money::zero()).unwrap();

        let result = service.create("checking", "EUR", Money::zero());
        assert!(matches!(result, Err(FintrackError::Duplicate { .. })));
    }

    #[test]
    fn test_find_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let created = service.create("My Checking", "USD", Money::zero()).unwrap();

        let found = service.find("My Checking").unwrap().unwrap();
        assert_eq!(found.id, created.id);

        // Case insensitive
        let found = service.find("my checking").unwrap().unwrap();
        assert_eq!(found.id, created.id);

        // By full ID
        let found = service
            .find(&created.id.as_uuid().to_string())
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[test]
    fn test_balance_derivation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create("Test", "USD", Money::new(dec!(100.00)))
            .unwrap();
        let owner = OperationOwner::Account(account.id);
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        storage
            .operations
            .upsert(Operation::new(
                owner,
                date,
                Money::new(dec!(30.00)),
                OperationKind::Income(IncomeCategory::Salary),
            ))
            .unwrap();
        storage
            .operations
            .upsert(Operation::new(
                owner,
                date,
                Money::new(dec!(20.00)),
                OperationKind::Expense(ExpenseCategory::Food),
            ))
            .unwrap();

        // 100 + 30 - 20
        assert_eq!(
            service.balance(account.id).unwrap(),
            Money::new(dec!(110.00))
        );

        // Pure read: asking twice changes nothing
        assert_eq!(
            service.balance(account.id).unwrap(),
            Money::new(dec!(110.00))
        );
    }

    #[test]
    fn test_balance_may_go_negative() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create("Overdraft", "USD", Money::new(dec!(10.00)))
            .unwrap();

        storage
            .operations
            .upsert(Operation::new(
                OperationOwner::Account(account.id),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                Money::new(dec!(25.00)),
                OperationKind::Expense(ExpenseCategory::Rent),
            ))
            .unwrap();

        // Overdraft is allowed for ordinary operations
        assert_eq!(
            service.balance(account.id).unwrap(),
            Money::new(dec!(-15.00))
        );
    }

    #[test]
    fn test_rename_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service.create("Old Name", "USD", Money::zero()).unwrap();
        let renamed = service.rename(account.id, "New Name").unwrap();
        assert_eq!(renamed.name, "New Name");

        let other = service.create("Taken", "USD", Money::zero()).unwrap();
        let result = service.rename(other.id, "New Name");
        assert!(matches!(result, Err(FintrackError::Duplicate { .. })));
    }

    #[test]
    fn test_delete_cascades() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create("Test", "USD", Money::new(dec!(100.00)))
            .unwrap();

        // A goal with one private operation
        let goal = crate::models::SavingGoal::new(
            "Car",
            Money::new(dec!(50.00)),
            account.id,
        );
        let goal_id = goal.id;
        storage.goals.upsert(goal).unwrap();
        storage
            .operations
            .upsert(Operation::new(
                OperationOwner::Goal(goal_id),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                Money::new(dec!(10.00)),
                OperationKind::Income(IncomeCategory::Undefined),
            ))
            .unwrap();

        let cascade = service.delete(account.id).unwrap();

        // Seed operation + goal operation, one goal
        assert_eq!(cascade.operations.len(), 2);
        assert_eq!(cascade.goals, vec![goal_id]);

        assert_eq!(storage.accounts.count().unwrap(), 0);
        assert_eq!(storage.operations.count().unwrap(), 0);
        assert_eq!(storage.goals.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_missing_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let result = service.delete(AccountId::new());
        assert!(matches!(result, Err(FintrackError::NotFound { .. })));
    }
}
