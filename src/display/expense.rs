//! Expense display formatting

use crate::config::Settings;
use crate::models::{Expense, Money};

use super::money;

/// Expenses as a register with a total line
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:16} {:>14}  {}\n",
        "ID", "When", "Amount", "Memo"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:12} {:16} {:>14}  {}\n",
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d %H:%M").to_string(),
            money(settings, expense.amount),
            expense.memo
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(56));
    output.push('\n');
    output.push_str(&format!(
        "{:29} {:>14}\n",
        "Total",
        money(settings, total)
    ));

    output
}
