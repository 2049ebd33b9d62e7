//! Budget status calculator
//!
//! Combines a day's budget, the carry-over from the previous day and the
//! day's expenses into a `BudgetStatus`.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::TiccleResult;
use crate::models::{BudgetStatus, CarryOverPolicy, Money};
use crate::storage::{BudgetStore, ExpenseStore, Storage};

/// Computes the status of a day from the stores
pub struct StatusCalculator<'a, S: Storage> {
    budgets: &'a BudgetStore<S>,
    expenses: &'a ExpenseStore<S>,
    policy: CarryOverPolicy,
}

impl<'a, S: Storage> StatusCalculator<'a, S> {
    pub fn new(
        budgets: &'a BudgetStore<S>,
        expenses: &'a ExpenseStore<S>,
        policy: CarryOverPolicy,
    ) -> Self {
        Self {
            budgets,
            expenses,
            policy,
        }
    }

    /// Status for `date`
    ///
    /// A day without a budget reports the default status whatever was spent.
    /// Read failures are logged and also yield the default status.
    pub fn compute(&self, date: NaiveDate) -> BudgetStatus {
        match self.try_compute(date) {
            Ok(status) => status,
            Err(e) => {
                warn!(date = %date, error = %e, "could not compute budget status");
                BudgetStatus::default()
            }
        }
    }

    fn try_compute(&self, date: NaiveDate) -> TiccleResult<BudgetStatus> {
        let Some(budget) = self.budgets.get(date)? else {
            return Ok(BudgetStatus::default());
        };

        let carry_over = self.budgets.carry_over_for(date)?;
        let total_spent: Money = self
            .expenses
            .get_for_day(date)?
            .iter()
            .map(|e| e.amount)
            .sum();

        let remaining = budget.amount + carry_over - total_spent;
        Ok(BudgetStatus::new(remaining, carry_over, self.policy))
    }
}
