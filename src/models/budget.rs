//! Daily budget model
//!
//! One budget per calendar day: the amount allotted for the day, what has
//! been spent against it, and what rolled in from the day before.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::day::day_of;
use super::ids::BudgetId;
use super::money::Money;

/// The budget for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The day bucket this budget belongs to
    pub date: NaiveDate,

    /// Amount allotted for the day
    pub amount: Money,

    /// Running total of expenses attributed to the day
    #[serde(default)]
    pub spent: Money,

    /// Remaining amount rolled in from the previous day (negative after an overspend)
    #[serde(default)]
    pub carry_over: Money,
}

impl Budget {
    /// Create a new budget for a day with nothing spent and no carry-over
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            date,
            amount,
            spent: Money::zero(),
            carry_over: Money::zero(),
        }
    }

    /// Create a budget for the day a timestamp falls on
    pub fn for_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>, amount: Money) -> Self {
        Self::new(day_of(timestamp), amount)
    }

    /// Create a budget that starts with a carry-over from the previous day
    pub fn with_carry_over(date: NaiveDate, amount: Money, carry_over: Money) -> Self {
        let mut budget = Self::new(date, amount);
        budget.carry_over = carry_over;
        budget
    }

    /// What is left to spend: `amount + carry_over - spent`
    pub fn remaining(&self) -> Money {
        self.amount + self.carry_over - self.spent
    }

    /// Whether this budget belongs to the given day
    pub fn is_for_day(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount);
        }

        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} budget: {} (spent: {}, carry-over: {})",
            self.date, self.amount, self.spent, self.carry_over
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount,
    NegativeSpent,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Budget amount cannot be negative"),
            Self::NegativeSpent => write!(f, "Spent amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
