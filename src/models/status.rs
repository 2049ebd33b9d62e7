//! Derived budget status for a day
//!
//! Never persisted; recomputed from the stores on every query.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Which carry-over amounts count as "has carry-over"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CarryOverPolicy {
    /// Any non-zero carry-over, including debt from an overspent day
    #[default]
    AnyNonZero,
    /// Only unspent money rolled forward
    PositiveOnly,
}

impl CarryOverPolicy {
    /// Whether a carry-over amount is flagged under this policy
    pub fn flags(&self, carry_over: Money) -> bool {
        match self {
            Self::AnyNonZero => !carry_over.is_zero(),
            Self::PositiveOnly => carry_over.is_positive(),
        }
    }
}

impl fmt::Display for CarryOverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnyNonZero => write!(f, "any-non-zero"),
            Self::PositiveOnly => write!(f, "positive-only"),
        }
    }
}

/// Summary of where a day's budget stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    /// Spending exceeded budget plus carry-over
    pub is_over_spent: bool,

    /// The day started with money (or debt) from the previous day
    pub has_carry_over: bool,

    /// Budget plus carry-over minus the day's expenses
    pub remaining_amount: Money,
}

impl BudgetStatus {
    /// Build a status from a remaining amount and the carry-over that fed it
    pub fn new(remaining_amount: Money, carry_over: Money, policy: CarryOverPolicy) -> Self {
        Self {
            is_over_spent: remaining_amount.is_negative(),
            has_carry_over: policy.flags(carry_over),
            remaining_amount,
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_over_spent {
            write!(f, "Over budget by {}", self.remaining_amount.abs())
        } else {
            write!(f, "Remaining: {}", self.remaining_amount)
        }
    }
}
