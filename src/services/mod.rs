//! Service layer for Ticcle
//!
//! Business logic on top of the stores: the status calculation, the
//! tracker facade the CLI uses, and change notifications.

pub mod events;
pub mod status;
pub mod tracker;

pub use events::{ChangeEvent, EventHub};
pub use status::StatusCalculator;
pub use tracker::{BudgetTracker, HistoryEntry};
