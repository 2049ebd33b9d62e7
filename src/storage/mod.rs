//! Storage layer for Ticcle
//!
//! The storage port and its backends, plus the two stores that own the
//! budget and expense collections.

pub mod budgets;
pub mod expenses;
pub mod file;
pub mod file_io;
pub mod memory;
pub mod port;

pub use budgets::BudgetStore;
pub use expenses::ExpenseStore;
pub use file::FileStorage;
pub use file_io::{read_if_exists, write_atomic, write_json_atomic};
pub use memory::MemoryStorage;
pub use port::{Storage, StorageKey};
