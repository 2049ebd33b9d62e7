//! Budget tracker
//!
//! The entry point the CLI works through. Wires the budget and expense
//! stores over one storage backend, keeps a day's spent total in step with
//! its expenses, and records every change in the audit log.

use std::collections::BTreeMap;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::Settings;
use crate::error::{TiccleError, TiccleResult};
use crate::models::day::{days_between, days_in_month, month_bounds};
use crate::models::{Budget, BudgetId, BudgetStatus, Expense, ExpenseId, Money};
use crate::storage::{BudgetStore, ExpenseStore, Storage};

use super::events::{ChangeEvent, EventHub};
use super::status::StatusCalculator;

/// One day of the history feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub budget: Option<Budget>,
    pub expenses: Vec<Expense>,
    pub status: BudgetStatus,
}

impl HistoryEntry {
    /// Sum of the day's expenses
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

/// Budget and expense operations over a shared storage backend
pub struct BudgetTracker<S: Storage> {
    budgets: BudgetStore<S>,
    expenses: ExpenseStore<S>,
    settings: Settings,
    audit: Option<AuditLogger>,
    events: EventHub,
}

impl<S: Storage> BudgetTracker<S> {
    pub fn new(storage: Arc<S>, settings: Settings) -> Self {
        Self {
            budgets: BudgetStore::new(Arc::clone(&storage)),
            expenses: ExpenseStore::new(storage),
            settings,
            audit: None,
            events: EventHub::new(),
        }
    }

    /// Record every mutation in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn budget_store(&self) -> &BudgetStore<S> {
        &self.budgets
    }

    pub fn expense_store(&self) -> &ExpenseStore<S> {
        &self.expenses
    }

    /// Receive a `ChangeEvent` for every successful mutation from now on
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        self.events.subscribe()
    }

    // Budgets

    /// Set the budget for one day
    ///
    /// A day that gets its first budget starts with whatever its recorded
    /// expenses already add up to as spent.
    pub fn set_budget(&self, date: NaiveDate, amount: Money) -> TiccleResult<Budget> {
        require_positive(amount)?;

        let before = self.budgets.get(date)?;
        let already_spent: Money = match before {
            Some(_) => Money::zero(),
            None => self.expenses.get_for_day(date)?.iter().map(|e| e.amount).sum(),
        };
        let budget = self.budgets.set_amount(date, amount, already_spent)?;

        let entry = match &before {
            Some(before) => AuditEntry::update(
                EntityType::Budget,
                budget.id.to_string(),
                before,
                &budget,
            ),
            None => AuditEntry::create(EntityType::Budget, budget.id.to_string(), &budget),
        };
        self.audit(entry.on_day(date));
        self.events.publish(ChangeEvent::BudgetSaved(budget.clone()));

        Ok(budget)
    }

    /// Set the same budget on several days
    pub fn set_budget_for_dates(
        &self,
        dates: &[NaiveDate],
        amount: Money,
    ) -> TiccleResult<Vec<Budget>> {
        if dates.is_empty() {
            return Err(TiccleError::Validation(
                "Select at least one date".to_string(),
            ));
        }
        require_positive(amount)?;

        let mut sorted = dates.to_vec();
        sorted.sort();
        sorted.dedup();

        sorted
            .into_iter()
            .map(|date| self.set_budget(date, amount))
            .collect()
    }

    /// Spread a monthly budget over the days of a month
    ///
    /// Each day gets an equal share rounded to two decimal places. Days that
    /// already have a budget keep it. Returns the budgets created.
    pub fn set_monthly_budget(
        &self,
        year: i32,
        month: u32,
        monthly_amount: Money,
    ) -> TiccleResult<Vec<Budget>> {
        require_positive(monthly_amount)?;

        let (first, last) = month_bounds(year, month)
            .ok_or_else(|| TiccleError::Validation(format!("Invalid month: {}-{}", year, month)))?;
        let daily = days_in_month(year, month)
            .and_then(|days| monthly_amount.split_evenly(days))
            .ok_or_else(|| TiccleError::Validation(format!("Invalid month: {}-{}", year, month)))?;

        let existing = self.monthly_budgets(year, month)?;
        debug!(year, month, daily = %daily, already_set = existing.len(), "spreading monthly budget");

        let mut created = Vec::new();
        for date in days_between(first, last).filter(|d| !existing.contains_key(d)) {
            created.push(self.set_budget(date, daily)?);
        }
        Ok(created)
    }

    /// Delete a budget
    pub fn delete_budget(&self, id: BudgetId) -> TiccleResult<Budget> {
        let removed = self
            .budgets
            .delete(id)?
            .ok_or_else(|| TiccleError::budget_not_found(id.to_string()))?;

        self.audit(
            AuditEntry::delete(EntityType::Budget, id.to_string(), &removed).on_day(removed.date),
        );
        self.events.publish(ChangeEvent::BudgetDeleted {
            id,
            date: removed.date,
        });

        Ok(removed)
    }

    pub fn budget(&self, date: NaiveDate) -> TiccleResult<Option<Budget>> {
        self.budgets.get(date)
    }

    /// Budgets of a month keyed by day
    pub fn monthly_budgets(
        &self,
        year: i32,
        month: u32,
    ) -> TiccleResult<BTreeMap<NaiveDate, Budget>> {
        let (first, last) = month_bounds(year, month)
            .ok_or_else(|| TiccleError::Validation(format!("Invalid month: {}-{}", year, month)))?;

        Ok(self
            .budgets
            .get_range(first, last)?
            .into_iter()
            .map(|b| (b.date, b))
            .collect())
    }

    /// Find a budget by its full ID or a short ID prefix such as `bud-1a2b3c4d`
    pub fn find_budget(&self, reference: &str) -> TiccleResult<Budget> {
        let matches: Vec<_> = self
            .budgets
            .get_all()?
            .into_iter()
            .filter(|b| b.id.matches_reference(reference))
            .collect();
        single_match(matches, reference, TiccleError::budget_not_found)
    }

    // Expenses

    /// Record an expense and charge it to its day's budget
    ///
    /// If the budget can't be charged the expense is removed again and the
    /// error returned.
    pub fn add_expense(&self, expense: Expense) -> TiccleResult<Expense> {
        let day = expense.day();
        self.expenses.save(expense.clone())?;
        let charged = match self.budgets.record_spending(day, expense.amount) {
            Ok(charged) => charged,
            Err(e) => {
                if let Err(undo) = self.expenses.delete(expense.id) {
                    warn!(id = %expense.id, error = %undo, "could not roll back expense");
                }
                return Err(e);
            }
        };

        self.audit(
            AuditEntry::create(EntityType::Expense, expense.id.to_string(), &expense).on_day(day),
        );
        self.events.publish(ChangeEvent::ExpenseAdded(expense.clone()));
        if let Some(budget) = charged {
            self.events.publish(ChangeEvent::BudgetSaved(budget));
        }

        Ok(expense)
    }

    /// Delete an expense and give its amount back to the day's budget
    pub fn delete_expense(&self, id: ExpenseId) -> TiccleResult<Expense> {
        let removed = self
            .expenses
            .delete(id)?
            .ok_or_else(|| TiccleError::expense_not_found(id.to_string()))?;
        let day = removed.day();
        let refunded = match self.budgets.record_spending(day, -removed.amount) {
            Ok(refunded) => refunded,
            Err(e) => {
                if let Err(undo) = self.expenses.save(removed.clone()) {
                    warn!(id = %id, error = %undo, "could not restore expense");
                }
                return Err(e);
            }
        };

        self.audit(
            AuditEntry::delete(EntityType::Expense, id.to_string(), &removed).on_day(day),
        );
        self.events
            .publish(ChangeEvent::ExpenseDeleted { id, date: day });
        if let Some(budget) = refunded {
            self.events.publish(ChangeEvent::BudgetSaved(budget));
        }

        Ok(removed)
    }

    pub fn expenses_for_day(&self, date: NaiveDate) -> TiccleResult<Vec<Expense>> {
        self.expenses.get_for_day(date)
    }

    /// Find an expense by its full ID or a short ID prefix such as `exp-1a2b3c4d`
    pub fn find_expense(&self, reference: &str) -> TiccleResult<Expense> {
        let matches: Vec<_> = self
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches_reference(reference))
            .collect();
        single_match(matches, reference, TiccleError::expense_not_found)
    }

    // Queries

    /// Where the budget for `date` stands
    pub fn status(&self, date: NaiveDate) -> BudgetStatus {
        StatusCalculator::new(&self.budgets, &self.expenses, self.settings.carry_over_policy)
            .compute(date)
    }

    /// Days from `start` to `end` that have a budget or an expense,
    /// newest first
    pub fn history(&self, start: NaiveDate, end: NaiveDate) -> TiccleResult<Vec<HistoryEntry>> {
        let mut days: BTreeMap<NaiveDate, HistoryEntry> = BTreeMap::new();

        for budget in self.budgets.get_range(start, end)? {
            let date = budget.date;
            days.entry(date).or_insert_with(|| empty_entry(date)).budget = Some(budget);
        }
        for expense in self.expenses.get_range(start, end)? {
            let date = expense.day();
            days.entry(date)
                .or_insert_with(|| empty_entry(date))
                .expenses
                .push(expense);
        }

        Ok(days
            .into_values()
            .rev()
            .map(|mut entry| {
                entry.status = self.status(entry.date);
                entry
            })
            .collect())
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, entity = %entry.entity_id, "failed to write audit entry");
            }
        }
    }
}

fn require_positive(amount: Money) -> TiccleResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(TiccleError::Validation(
            "Amount must be greater than zero".to_string(),
        ))
    }
}

fn empty_entry(date: NaiveDate) -> HistoryEntry {
    HistoryEntry {
        date,
        budget: None,
        expenses: Vec::new(),
        status: BudgetStatus::default(),
    }
}

fn single_match<T>(
    mut matches: Vec<T>,
    reference: &str,
    not_found: fn(String) -> TiccleError,
) -> TiccleResult<T> {
    match matches.len() {
        0 => Err(not_found(reference.to_string())),
        1 => Ok(matches.remove(0)),
        n => Err(TiccleError::Validation(format!(
            "'{}' matches {} records, use a longer ID",
            reference, n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::error::StorageError;
    use crate::models::CarryOverPolicy;
    use crate::storage::{FileStorage, MemoryStorage, StorageKey};
    use chrono::{DateTime, FixedOffset, TimeZone};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;

    /// Memory backend whose budget writes can be switched off
    #[derive(Default)]
    struct FlakyBudgets {
        inner: MemoryStorage,
        fail_budgets: AtomicBool,
    }

    impl Storage for FlakyBudgets {
        fn read_bytes(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError> {
            self.inner.read_bytes(key)
        }

        fn write_bytes(&self, key: StorageKey, bytes: &[u8]) -> Result<(), StorageError> {
            if key == StorageKey::Budgets && self.fail_budgets.load(Ordering::SeqCst) {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "disk full".into(),
                });
            }
            self.inner.write_bytes(key, bytes)
        }
    }

    fn create_test_tracker() -> BudgetTracker<MemoryStorage> {
        BudgetTracker::new(Arc::new(MemoryStorage::new()), Settings::default())
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn at(d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, d, h, 0, 0)
            .unwrap()
    }

    fn won(units: i64) -> Money {
        Money::from_major(units)
    }

    fn expense(units: i64, d: u32, h: u32) -> Expense {
        Expense::at(won(units), at(d, h)).unwrap()
    }

    #[test]
    fn test_end_to_end_carry_over() {
        let tracker = create_test_tracker();

        tracker.set_budget(day(1), won(30000)).unwrap();
        tracker.add_expense(expense(5000, 1, 12)).unwrap();
        assert_eq!(tracker.status(day(1)).remaining_amount, won(25000));

        let second = tracker.set_budget(day(2), won(20000)).unwrap();
        assert_eq!(second.carry_over, won(25000));
        assert_eq!(
            tracker.budget_store().carry_over_for(day(2)).unwrap(),
            won(25000)
        );

        let status = tracker.status(day(2));
        assert_eq!(status.remaining_amount, won(45000));
        assert!(status.has_carry_over);
        assert!(!status.is_over_spent);
    }

    #[test]
    fn test_expense_before_budget_counts_toward_carry_over() {
        let tracker = create_test_tracker();

        tracker.add_expense(expense(5000, 1, 9)).unwrap();
        let first = tracker.set_budget(day(1), won(30000)).unwrap();
        assert_eq!(first.spent, won(5000));
        assert_eq!(tracker.status(day(1)).remaining_amount, won(25000));

        tracker.set_budget(day(2), won(20000)).unwrap();
        assert_eq!(
            tracker.budget_store().carry_over_for(day(2)).unwrap(),
            won(25000)
        );
        assert_eq!(tracker.status(day(2)).remaining_amount, won(45000));
    }

    #[test]
    fn test_failed_charge_rolls_back_expense() {
        let storage = Arc::new(FlakyBudgets::default());
        let tracker = BudgetTracker::new(Arc::clone(&storage), Settings::default());
        tracker.set_budget(day(1), won(10000)).unwrap();
        let events = tracker.subscribe();

        storage.fail_budgets.store(true, Ordering::SeqCst);
        let err = tracker.add_expense(expense(3000, 1, 9)).unwrap_err();
        assert!(matches!(err, TiccleError::Storage(StorageError::Write { .. })));

        assert!(tracker.expenses_for_day(day(1)).unwrap().is_empty());
        assert_eq!(tracker.budget(day(1)).unwrap().unwrap().spent, Money::zero());
        assert!(events.try_recv().is_err());

        // Retrying once the disk recovers records the expense exactly once
        storage.fail_budgets.store(false, Ordering::SeqCst);
        tracker.add_expense(expense(3000, 1, 9)).unwrap();
        assert_eq!(tracker.expenses_for_day(day(1)).unwrap().len(), 1);
        assert_eq!(tracker.budget(day(1)).unwrap().unwrap().spent, won(3000));
    }

    #[test]
    fn test_failed_refund_restores_expense() {
        let storage = Arc::new(FlakyBudgets::default());
        let tracker = BudgetTracker::new(Arc::clone(&storage), Settings::default());
        tracker.set_budget(day(1), won(10000)).unwrap();
        let lunch = tracker.add_expense(expense(3000, 1, 12)).unwrap();

        storage.fail_budgets.store(true, Ordering::SeqCst);
        assert!(tracker.delete_expense(lunch.id).is_err());

        assert_eq!(tracker.expenses_for_day(day(1)).unwrap(), vec![lunch]);
        assert_eq!(tracker.budget(day(1)).unwrap().unwrap().spent, won(3000));
    }

    #[test]
    fn test_add_expense_charges_budget() {
        let tracker = create_test_tracker();
        tracker.set_budget(day(1), won(10000)).unwrap();
        tracker.add_expense(expense(4000, 1, 9)).unwrap();
        tracker.add_expense(expense(8000, 1, 18)).unwrap();

        let budget = tracker.budget(day(1)).unwrap().unwrap();
        assert_eq!(budget.spent, won(12000));
        assert_eq!(budget.remaining(), won(-2000));

        let status = tracker.status(day(1));
        assert!(status.is_over_spent);
        assert_eq!(status.remaining_amount, won(-2000));
    }

    #[test]
    fn test_expense_without_budget() {
        let tracker = create_test_tracker();
        tracker.add_expense(expense(4000, 1, 9)).unwrap();

        assert_eq!(tracker.expenses_for_day(day(1)).unwrap().len(), 1);
        assert_eq!(tracker.status(day(1)), BudgetStatus::default());
    }

    #[test]
    fn test_delete_expense_refunds_budget() {
        let tracker = create_test_tracker();
        tracker.set_budget(day(1), won(10000)).unwrap();
        tracker.set_budget(day(2), won(10000)).unwrap();
        let coffee = tracker.add_expense(expense(4500, 1, 9)).unwrap();
        assert_eq!(
            tracker.budget(day(2)).unwrap().unwrap().carry_over,
            won(5500)
        );

        tracker.delete_expense(coffee.id).unwrap();

        assert_eq!(tracker.budget(day(1)).unwrap().unwrap().spent, Money::zero());
        assert_eq!(
            tracker.budget(day(2)).unwrap().unwrap().carry_over,
            won(10000)
        );
        assert!(tracker.expenses_for_day(day(1)).unwrap().is_empty());

        let err = tracker.delete_expense(coffee.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_set_budget_rejects_non_positive() {
        let tracker = create_test_tracker();
        assert!(tracker.set_budget(day(1), Money::zero()).unwrap_err().is_validation());
        assert!(tracker.set_budget(day(1), won(-1)).unwrap_err().is_validation());
        assert!(tracker.budget(day(1)).unwrap().is_none());
    }

    #[test]
    fn test_set_budget_keeps_spending() {
        let tracker = create_test_tracker();
        tracker.set_budget(day(1), won(10000)).unwrap();
        tracker.add_expense(expense(3000, 1, 9)).unwrap();

        let updated = tracker.set_budget(day(1), won(15000)).unwrap();
        assert_eq!(updated.spent, won(3000));
        assert_eq!(tracker.status(day(1)).remaining_amount, won(12000));
    }

    #[test]
    fn test_set_budget_for_dates() {
        let tracker = create_test_tracker();
        let err = tracker.set_budget_for_dates(&[], won(1000)).unwrap_err();
        assert!(err.is_validation());

        let set = tracker
            .set_budget_for_dates(&[day(3), day(1), day(3)], won(1000))
            .unwrap();
        let days: Vec<_> = set.iter().map(|b| b.date).collect();
        assert_eq!(days, vec![day(1), day(3)]);

        let err = tracker
            .set_budget_for_dates(&[day(5)], Money::zero())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_monthly_budget_fills_unset_days() {
        let tracker = create_test_tracker();
        let feb = |d| NaiveDate::from_ymd_opt(2025, 2, d).unwrap();
        tracker.set_budget(feb(10), won(50000)).unwrap();

        let created = tracker.set_monthly_budget(2025, 2, won(280000)).unwrap();
        assert_eq!(created.len(), 27);
        assert!(created.iter().all(|b| b.amount == won(10000)));

        let month = tracker.monthly_budgets(2025, 2).unwrap();
        assert_eq!(month.len(), 28);
        assert_eq!(month[&feb(10)].amount, won(50000));
    }

    #[test]
    fn test_monthly_budget_rounds_daily_share() {
        let tracker = create_test_tracker();
        let created = tracker.set_monthly_budget(2025, 3, won(100000)).unwrap();
        assert_eq!(created.len(), 31);
        assert_eq!(created[0].amount, Money::new(dec!(3225.81)));
    }

    #[test]
    fn test_monthly_budget_rejects_bad_month() {
        let tracker = create_test_tracker();
        assert!(tracker
            .set_monthly_budget(2025, 13, won(1000))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_delete_budget() {
        let tracker = create_test_tracker();
        let first = tracker.set_budget(day(1), won(1000)).unwrap();
        tracker.set_budget(day(2), won(2000)).unwrap();

        let removed = tracker.delete_budget(first.id).unwrap();
        assert_eq!(removed.date, day(1));
        assert!(tracker.budget(day(1)).unwrap().is_none());
        assert!(tracker.budget(day(2)).unwrap().is_some());

        assert!(tracker.delete_budget(first.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_by_short_reference() {
        let tracker = create_test_tracker();
        let budget = tracker.set_budget(day(1), won(1000)).unwrap();
        let spent = tracker.add_expense(expense(100, 1, 9)).unwrap();

        assert_eq!(tracker.find_budget(&budget.id.to_string()).unwrap().id, budget.id);
        assert_eq!(tracker.find_expense(&spent.id.to_string()).unwrap().id, spent.id);
        assert!(tracker.find_expense("exp-zzzzzzzz").unwrap_err().is_not_found());
        assert!(tracker.find_budget("bud-12").unwrap_err().is_not_found());
    }

    #[test]
    fn test_history_newest_first() {
        let tracker = create_test_tracker();
        tracker.set_budget(day(1), won(10000)).unwrap();
        tracker.add_expense(expense(2000, 1, 9)).unwrap();
        tracker.add_expense(expense(1000, 3, 9)).unwrap();
        tracker.set_budget(day(4), won(10000)).unwrap();
        tracker.set_budget(day(20), won(10000)).unwrap();

        let history = tracker.history(day(1), day(10)).unwrap();
        let days: Vec<_> = history.iter().map(|h| h.date).collect();
        assert_eq!(days, vec![day(4), day(3), day(1)]);

        assert!(history[1].budget.is_none());
        assert_eq!(history[1].total_spent(), won(1000));
        assert_eq!(history[2].status.remaining_amount, won(8000));
    }

    #[test]
    fn test_events_published() {
        let tracker = create_test_tracker();
        let events = tracker.subscribe();

        let budget = tracker.set_budget(day(1), won(10000)).unwrap();
        let spent = tracker.add_expense(expense(1000, 1, 9)).unwrap();
        tracker.delete_budget(budget.id).unwrap();

        let received: Vec<_> = events.try_iter().collect();
        assert!(matches!(received[0], ChangeEvent::BudgetSaved(ref b) if b.id == budget.id));
        assert_eq!(received[1], ChangeEvent::ExpenseAdded(spent));
        assert!(matches!(received[2], ChangeEvent::BudgetSaved(ref b) if b.spent == won(1000)));
        assert_eq!(
            received[3],
            ChangeEvent::BudgetDeleted {
                id: budget.id,
                date: day(1)
            }
        );
    }

    #[test]
    fn test_failed_mutation_publishes_nothing() {
        let tracker = create_test_tracker();
        let events = tracker.subscribe();
        assert!(tracker.set_budget(day(1), Money::zero()).is_err());
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let tracker = BudgetTracker::new(
            Arc::new(FileStorage::new(temp_dir.path().join("data"))),
            Settings::default(),
        )
        .with_audit(logger.clone());

        tracker.set_budget(day(1), won(10000)).unwrap();
        tracker.set_budget(day(1), won(12000)).unwrap();
        let spent = tracker.add_expense(expense(500, 1, 9)).unwrap();
        tracker.delete_expense(spent.id).unwrap();

        let entries = logger.read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| (e.operation, e.entity_type)).collect();
        assert_eq!(
            ops,
            vec![
                (Operation::Create, EntityType::Budget),
                (Operation::Update, EntityType::Budget),
                (Operation::Create, EntityType::Expense),
                (Operation::Delete, EntityType::Expense),
            ]
        );
        assert!(entries[1].diff_summary.as_deref().unwrap().contains("amount"));
        assert_eq!(entries[0].day.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn test_audit_failure_does_not_fail_mutation() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the log file should be
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let tracker =
            BudgetTracker::new(Arc::new(MemoryStorage::new()), Settings::default()).with_audit(logger);

        assert!(tracker.set_budget(day(1), won(1000)).is_ok());
    }

    #[test]
    fn test_positive_only_policy_from_settings() {
        let settings = Settings {
            carry_over_policy: CarryOverPolicy::PositiveOnly,
            ..Settings::default()
        };
        let tracker = BudgetTracker::new(Arc::new(MemoryStorage::new()), settings);
        tracker.set_budget(day(1), won(1000)).unwrap();
        tracker.add_expense(expense(3000, 1, 9)).unwrap();
        tracker.set_budget(day(2), won(1000)).unwrap();

        let status = tracker.status(day(2));
        assert_eq!(status.remaining_amount, won(-1000));
        assert!(!status.has_carry_over);
        assert!(status.is_over_spent);
    }
}
