//! Budget and status display formatting

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Budget, BudgetStatus};

use super::{date, money};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Budget")]
    amount: String,
    #[tabled(rename = "Carry-over")]
    carry_over: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Budgets as a table, one row per day
pub fn format_budget_table(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        id: b.id.to_string(),
        date: date(settings, b.date),
        amount: money(settings, b.amount),
        carry_over: money(settings, b.carry_over),
        spent: money(settings, b.spent),
        remaining: money(settings, b.remaining()),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Detail view of one budget
pub fn format_budget_details(budget: &Budget, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget:     {}\n", budget.id));
    output.push_str(&format!("Date:       {}\n", date(settings, budget.date)));
    output.push_str(&format!("Amount:     {}\n", money(settings, budget.amount)));
    output.push_str(&format!("Carry-over: {}\n", money(settings, budget.carry_over)));
    output.push_str(&format!("Spent:      {}\n", money(settings, budget.spent)));
    output.push_str(&format!("Remaining:  {}\n", money(settings, budget.remaining())));
    output
}

/// Status summary for a day
pub fn format_status(day: NaiveDate, status: &BudgetStatus, settings: &Settings) -> String {
    let mut output = format!("Status for {}\n", date(settings, day));

    if status.is_over_spent {
        output.push_str(&format!(
            "  Over budget by {}\n",
            money(settings, status.remaining_amount.abs())
        ));
    } else {
        output.push_str(&format!(
            "  Remaining: {}\n",
            money(settings, status.remaining_amount)
        ));
    }

    if status.has_carry_over {
        output.push_str("  Includes carry-over from the previous day\n");
    }

    output
}
