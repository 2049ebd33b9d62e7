//! Audit logging for Ticcle
//!
//! Every budget and expense change is appended to `audit.log` as one JSON
//! line holding the record before and after the change.
//!
//! ```rust,ignore
//! use ticcle::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, expense.id.to_string(), &expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
