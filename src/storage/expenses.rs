//! Expense store
//!
//! Owns the collection of expenses stored under the `expenses` key.
//! Expenses are appended, never replaced by day; any number can share a day.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{StorageError, TiccleError, TiccleResult};
use crate::models::{Expense, ExpenseId};

use super::port::{Storage, StorageKey};

/// Store for recorded expenses
pub struct ExpenseStore<S: Storage> {
    storage: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: Storage> ExpenseStore<S> {
    /// Create a store over a shared storage backend
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Append an expense
    ///
    /// Rejects non-positive amounts and IDs that are already stored.
    pub fn save(&self, expense: Expense) -> TiccleResult<()> {
        expense
            .validate()
            .map_err(|e| TiccleError::Validation(e.to_string()))?;

        let _guard = self.lock()?;
        let mut expenses = self.load_all()?;

        if expenses.iter().any(|e| e.id == expense.id) {
            return Err(TiccleError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        debug!(day = %expense.day(), amount = %expense.amount, "saving expense");
        expenses.push(expense);
        self.persist(expenses)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TiccleResult<Option<Expense>> {
        let expenses = self.load_all()?;
        Ok(expenses.into_iter().find(|e| e.id == id))
    }

    /// Get the expenses that fall on a day, earliest first
    pub fn get_for_day(&self, date: NaiveDate) -> TiccleResult<Vec<Expense>> {
        let mut expenses: Vec<_> = self
            .load_all()?
            .into_iter()
            .filter(|e| e.is_same_day(date))
            .collect();
        expenses.sort_by_key(|e| e.date);
        Ok(expenses)
    }

    /// Get the expenses whose day falls within `start..=end`, earliest first
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> TiccleResult<Vec<Expense>> {
        let mut expenses: Vec<_> = self
            .load_all()?
            .into_iter()
            .filter(|e| {
                let day = e.day();
                day >= start && day <= end
            })
            .collect();
        expenses.sort_by_key(|e| e.date);
        Ok(expenses)
    }

    /// Get every stored expense, earliest first
    pub fn get_all(&self) -> TiccleResult<Vec<Expense>> {
        let mut expenses = self.load_all()?;
        expenses.sort_by_key(|e| e.date);
        Ok(expenses)
    }

    /// Delete an expense by ID
    ///
    /// Returns the removed expense, or `None` if there was nothing to delete.
    pub fn delete(&self, id: ExpenseId) -> TiccleResult<Option<Expense>> {
        let _guard = self.lock()?;
        let mut expenses = self.load_all()?;

        let Some(index) = expenses.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let removed = expenses.remove(index);
        debug!(day = %removed.day(), id = %id, "deleting expense");
        self.persist(expenses)?;
        Ok(Some(removed))
    }

    fn lock(&self) -> TiccleResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| TiccleError::Lock(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load the collection, treating a missing or unreadable value as empty
    fn load_all(&self) -> TiccleResult<Vec<Expense>> {
        match self.storage.load::<Vec<Expense>>(StorageKey::Expenses) {
            Ok(expenses) => Ok(expenses),
            Err(StorageError::NotFound { .. }) => Ok(Vec::new()),
            Err(e @ StorageError::Decoding { .. }) => {
                warn!(error = %e, "stored expenses could not be decoded, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, mut expenses: Vec<Expense>) -> TiccleResult<()> {
        expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        self.storage.save(&expenses, StorageKey::Expenses)?;
        Ok(())
    }
}
