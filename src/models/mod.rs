//! Core data models for Ticcle
//!
//! Daily budgets, expenses, and the status derived from them.

pub mod budget;
pub mod day;
pub mod expense;
pub mod ids;
pub mod money;
pub mod status;

pub use budget::{Budget, BudgetValidationError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{BudgetId, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use status::{BudgetStatus, CarryOverPolicy};
