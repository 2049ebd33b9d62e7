//! Change notifications
//!
//! Mutations made through the tracker are published to any number of
//! subscribers over `std::sync::mpsc` channels.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::models::{Budget, BudgetId, Expense, ExpenseId};

/// Something the tracker changed
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    BudgetSaved(Budget),
    BudgetDeleted { id: BudgetId, date: NaiveDate },
    ExpenseAdded(Expense),
    ExpenseDeleted { id: ExpenseId, date: NaiveDate },
}

impl ChangeEvent {
    /// The day whose status may have changed
    pub fn day(&self) -> NaiveDate {
        match self {
            Self::BudgetSaved(budget) => budget.date,
            Self::ExpenseAdded(expense) => expense.day(),
            Self::BudgetDeleted { date, .. } | Self::ExpenseDeleted { date, .. } => *date,
        }
    }
}

/// Fan-out of change events to subscribers
#[derive(Debug, Default)]
pub struct EventHub {
    subscribers: Mutex<Vec<Sender<ChangeEvent>>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }

    /// Send an event to every live subscriber, dropping those whose
    /// receiver has gone away
    pub fn publish(&self, event: ChangeEvent) {
        let Ok(mut subscribers) = self.subscribers.lock() else {
            return;
        };
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of subscribers still registered
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}
