//! CLI command handlers
//!
//! Bridges the clap argument parsing with the budget tracker. Amounts and
//! dates typed by the user are validated here before they reach the core.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_history_command, handle_status_command};

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone};

use crate::error::{TiccleError, TiccleResult};
use crate::models::day::{now, parse_month, today};
use crate::models::Money;

/// Parse a positive amount such as `30000`, `30,000` or `₩30,000`
///
/// `symbol` is the configured currency symbol, accepted in front of the
/// number alongside the common ones.
pub fn parse_amount(input: &str, symbol: &str) -> TiccleResult<Money> {
    let amount = Money::parse_with_symbol(input, symbol)
        .map_err(|e| TiccleError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(TiccleError::Validation(format!(
            "Amount must be greater than zero: '{}'",
            input
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub fn parse_date_or_today(input: Option<&str>) -> TiccleResult<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            TiccleError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(today()),
    }
}

/// Parse a `YYYY-MM` month, defaulting to the current one
pub fn parse_month_or_current(input: Option<&str>) -> TiccleResult<(i32, u32)> {
    match input {
        Some(s) => parse_month(s).ok_or_else(|| {
            TiccleError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", s))
        }),
        None => {
            let current = today();
            Ok((current.year(), current.month()))
        }
    }
}

/// When an expense on `date` happened
///
/// Today means right now; any other day is pinned to noon in the current
/// UTC offset.
pub fn timestamp_for(date: NaiveDate) -> TiccleResult<DateTime<FixedOffset>> {
    let current = now();
    if date == current.date_naive() {
        return Ok(current);
    }

    date.and_hms_opt(12, 0, 0)
        .and_then(|noon| current.offset().from_local_datetime(&noon).single())
        .ok_or_else(|| TiccleError::Validation(format!("Cannot place an expense on {}", date)))
}
