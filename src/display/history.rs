//! History feed display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::services::HistoryEntry;

use super::{date, money};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "")]
    flag: &'static str,
}

/// History entries as a table, newest day first
pub fn format_history(entries: &[HistoryEntry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No history in this period.".to_string();
    }

    let rows = entries.iter().map(|entry| HistoryRow {
        date: date(settings, entry.date),
        budget: entry
            .budget
            .as_ref()
            .map(|b| money(settings, b.amount))
            .unwrap_or_else(|| "-".to_string()),
        count: entry.expenses.len(),
        spent: money(settings, entry.total_spent()),
        remaining: money(settings, entry.status.remaining_amount),
        flag: if entry.status.is_over_spent { "over" } else { "" },
    });

    Table::new(rows).with(Style::psql()).to_string()
}
