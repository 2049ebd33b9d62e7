//! Status and history commands

use chrono::Duration;

use crate::display::{format_history, format_status};
use crate::error::{TiccleError, TiccleResult};
use crate::models::day::today;
use crate::services::BudgetTracker;
use crate::storage::Storage;

use super::parse_date_or_today;

/// Print the status of a day
pub fn handle_status_command<S: Storage>(
    tracker: &BudgetTracker<S>,
    date: Option<String>,
) -> TiccleResult<()> {
    let date = parse_date_or_today(date.as_deref())?;

    if tracker.budget(date)?.is_none() {
        println!("No budget set for {}", date);
        return Ok(());
    }

    print!(
        "{}",
        format_status(date, &tracker.status(date), tracker.settings())
    );
    Ok(())
}

/// Print the last `days` days of budgets and spending
pub fn handle_history_command<S: Storage>(
    tracker: &BudgetTracker<S>,
    days: Option<u32>,
) -> TiccleResult<()> {
    let days = days.unwrap_or(tracker.settings().history_days);
    if days == 0 {
        return Err(TiccleError::Validation(
            "History must cover at least one day".to_string(),
        ));
    }

    let end = today();
    let start = end
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .ok_or_else(|| {
            TiccleError::Validation(format!("History of {} days reaches past the calendar", days))
        })?;

    println!("History {} to {}", start, end);
    println!(
        "{}",
        format_history(&tracker.history(start, end)?, tracker.settings())
    );
    Ok(())
}
