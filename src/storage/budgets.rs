//! Budget store
//!
//! Owns the collection of daily budgets stored under the `budgets` key.
//! Every mutation is a read-modify-write of the whole collection, run under
//! the store's write lock so concurrent callers never overwrite each
//! other's changes.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{StorageError, TiccleError, TiccleResult};
use crate::models::day::{next_day, previous_day};
use crate::models::{Budget, BudgetId, BudgetValidationError, Money};

use super::port::{Storage, StorageKey};

/// Store for per-day budgets
pub struct BudgetStore<S: Storage> {
    storage: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: Storage> BudgetStore<S> {
    /// Create a store over a shared storage backend
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Upsert a budget by day: any budget already stored for the same
    /// calendar day is replaced
    pub fn save(&self, budget: Budget) -> TiccleResult<()> {
        budget
            .validate()
            .map_err(|e| TiccleError::Validation(e.to_string()))?;

        let _guard = self.lock()?;
        let mut budgets = self.load_all()?;

        budgets.retain(|b| !b.is_for_day(budget.date));
        debug!(date = %budget.date, amount = %budget.amount, "saving budget");
        budgets.push(budget);

        self.persist(budgets)
    }

    /// Get the budget for a day
    pub fn get(&self, date: NaiveDate) -> TiccleResult<Option<Budget>> {
        let budgets = self.load_all()?;
        Ok(budgets.into_iter().find(|b| b.is_for_day(date)))
    }

    /// Get all budgets from `start` to `end` inclusive, oldest first
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> TiccleResult<Vec<Budget>> {
        let mut budgets: Vec<_> = self
            .load_all()?
            .into_iter()
            .filter(|b| b.date >= start && b.date <= end)
            .collect();
        budgets.sort_by_key(|b| b.date);
        Ok(budgets)
    }

    /// Get every stored budget, oldest first
    pub fn get_all(&self) -> TiccleResult<Vec<Budget>> {
        let mut budgets = self.load_all()?;
        budgets.sort_by_key(|b| b.date);
        Ok(budgets)
    }

    /// Delete a budget by ID
    ///
    /// Returns the removed budget, or `None` if there was nothing to delete.
    pub fn delete(&self, id: BudgetId) -> TiccleResult<Option<Budget>> {
        let _guard = self.lock()?;
        let mut budgets = self.load_all()?;

        let Some(index) = budgets.iter().position(|b| b.id == id) else {
            return Ok(None);
        };

        let removed = budgets.remove(index);
        debug!(date = %removed.date, id = %id, "deleting budget");
        self.persist(budgets)?;
        Ok(Some(removed))
    }

    /// What rolls into `date` from the previous day: that day's remaining
    /// amount, or zero if it has no budget
    pub fn carry_over_for(&self, date: NaiveDate) -> TiccleResult<Money> {
        let budgets = self.load_all()?;
        Ok(carry_over_in(&budgets, date))
    }

    /// Set the allotted amount for a day
    ///
    /// An existing budget keeps its spent total and carry-over. A new one
    /// starts with `spent_if_new` already spent and the previous day's
    /// remaining amount as its carry-over. Either way the following day's
    /// stored carry-over is refreshed from the new remaining amount.
    pub fn set_amount(
        &self,
        date: NaiveDate,
        amount: Money,
        spent_if_new: Money,
    ) -> TiccleResult<Budget> {
        if amount.is_negative() {
            return Err(TiccleError::Validation(
                BudgetValidationError::NegativeAmount.to_string(),
            ));
        }
        if spent_if_new.is_negative() {
            return Err(TiccleError::Validation(
                BudgetValidationError::NegativeSpent.to_string(),
            ));
        }

        let _guard = self.lock()?;
        let mut budgets = self.load_all()?;

        let budget = match budgets.iter().position(|b| b.is_for_day(date)) {
            Some(index) => {
                budgets[index].amount = amount;
                budgets[index].clone()
            }
            None => {
                let mut created =
                    Budget::with_carry_over(date, amount, carry_over_in(&budgets, date));
                created.spent = spent_if_new;
                budgets.push(created.clone());
                created
            }
        };
        refresh_following(&mut budgets, &budget);

        debug!(date = %date, amount = %amount, carry_over = %budget.carry_over, spent = %budget.spent, "setting budget amount");
        self.persist(budgets)?;
        Ok(budget)
    }

    /// Attribute spending to a day's budget
    ///
    /// `delta` is added to the day's spent total (negative to take spending
    /// back; the total never drops below zero). The following day's stored
    /// carry-over is refreshed from the new remaining amount. Days beyond
    /// that are left alone. Returns the updated budget, or `None` if the day
    /// has no budget.
    pub fn record_spending(&self, date: NaiveDate, delta: Money) -> TiccleResult<Option<Budget>> {
        let _guard = self.lock()?;
        let mut budgets = self.load_all()?;

        let Some(index) = budgets.iter().position(|b| b.is_for_day(date)) else {
            return Ok(None);
        };

        let spent = budgets[index].spent + delta;
        budgets[index].spent = if spent.is_negative() { Money::zero() } else { spent };
        let updated = budgets[index].clone();

        refresh_following(&mut budgets, &updated);

        debug!(date = %date, delta = %delta, spent = %updated.spent, "recorded spending");
        self.persist(budgets)?;
        Ok(Some(updated))
    }

    fn lock(&self) -> TiccleResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| TiccleError::Lock(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load the collection, treating a missing or unreadable value as empty
    fn load_all(&self) -> TiccleResult<Vec<Budget>> {
        match self.storage.load::<Vec<Budget>>(StorageKey::Budgets) {
            Ok(budgets) => Ok(budgets),
            Err(StorageError::NotFound { .. }) => Ok(Vec::new()),
            Err(e @ StorageError::Decoding { .. }) => {
                warn!(error = %e, "stored budgets could not be decoded, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, mut budgets: Vec<Budget>) -> TiccleResult<()> {
        budgets.sort_by_key(|b| b.date);
        self.storage.save(&budgets, StorageKey::Budgets)?;
        Ok(())
    }
}

/// Point the next day's stored carry-over at `budget`'s remaining amount
fn refresh_following(budgets: &mut [Budget], budget: &Budget) {
    if let Some(following) = next_day(budget.date)
        .and_then(|next| budgets.iter_mut().find(|b| b.is_for_day(next)))
    {
        following.carry_over = budget.remaining();
    }
}

fn carry_over_in(budgets: &[Budget], date: NaiveDate) -> Money {
    previous_day(date)
        .and_then(|prev| budgets.iter().find(|b| b.is_for_day(prev)))
        .map(Budget::remaining)
        .unwrap_or_default()
}
