//! Ticcle - daily budget tracker with carry-over
//!
//! Each calendar day has its own budget. Expenses are recorded against the
//! day they happen on, and whatever a day leaves unspent (or overspent)
//! rolls into the next day's budget.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Error types
//! - `models`: Budgets, expenses, money and the derived status
//! - `storage`: The storage port, its file and in-memory backends, and the
//!   budget and expense stores built on it
//! - `services`: Status calculation and the tracker the CLI talks to
//! - `audit`: Append-only log of every change
//! - `display` and `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ticcle::config::Settings;
//! use ticcle::services::BudgetTracker;
//! use ticcle::storage::MemoryStorage;
//!
//! let tracker = BudgetTracker::new(Arc::new(MemoryStorage::new()), Settings::default());
//! tracker.set_budget(day, Money::from_major(30000))?;
//! let status = tracker.status(day);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TiccleError, TiccleResult};
