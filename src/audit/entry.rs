//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// Kind of record that changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Budget,
    Expense,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Expense => write!(f, "Expense"),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Display ID of the record, e.g. `bud-1a2b3c4d`
    pub entity_id: String,

    /// The day the record belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Field-by-field summary of an update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn base(operation: Operation, entity_type: EntityType, entity_id: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            day: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// A record was created
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::base(Operation::Create, entity_type, entity_id.into());
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// A record changed; the summary lists the top-level fields that differ
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut entry = Self::base(Operation::Update, entity_type, entity_id.into());
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.diff_summary = match (&entry.before, &entry.after) {
            (Some(b), Some(a)) => changed_fields(b, a),
            _ => None,
        };
        entry
    }

    /// A record was removed
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::base(Operation::Delete, entity_type, entity_id.into());
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// Tag the entry with the day it concerns
    pub fn on_day(mut self, day: impl ToString) -> Self {
        self.day = Some(day.to_string());
        self
    }

    /// One-line (or two-line, for updates) description for the terminal
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(day) = &self.day {
            output.push_str(&format!(" for {}", day));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// `field: old -> new` for each top-level field that differs
fn changed_fields(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before), Value::Object(after)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", before, after));
    };

    let changes: Vec<String> = after
        .iter()
        .filter_map(|(field, new)| match before.get(field) {
            Some(old) if old == new => None,
            Some(old) => Some(format!("{}: {} -> {}", field, old, new)),
            None => Some(format!("{}: (added) -> {}", field, new)),
        })
        .chain(
            before
                .iter()
                .filter(|(field, _)| !after.contains_key(*field))
                .map(|(field, old)| format!("{}: {} -> (removed)", field, old)),
        )
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
