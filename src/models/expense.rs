//! Expense model
//!
//! An expense is immutable once recorded. Its timestamp keeps the offset it
//! was recorded with, which pins the day bucket it is counted under.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::day::{self, day_of};
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// When the expense happened
    pub date: DateTime<FixedOffset>,

    /// When the record was created
    pub created_at: DateTime<FixedOffset>,

    /// Optional note
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
}

impl Expense {
    /// Record an expense that happens now
    pub fn new(amount: Money) -> Result<Self, ExpenseValidationError> {
        Self::at(amount, day::now())
    }

    /// Record an expense at a specific time
    pub fn at(amount: Money, date: DateTime<FixedOffset>) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            id: ExpenseId::new(),
            amount,
            date,
            created_at: day::now(),
            memo: String::new(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Attach a memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// The day bucket this expense counts toward
    pub fn day(&self) -> NaiveDate {
        day_of(&self.date)
    }

    /// Whether this expense falls on the given day
    pub fn is_same_day(&self, date: NaiveDate) -> bool {
        self.day() == date
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d %H:%M"), self.amount)?;
        if !self.memo.is_empty() {
            write!(f, " ({})", self.memo)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
