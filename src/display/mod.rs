//! Display formatting for terminal output
//!
//! Turns budgets, expenses and statuses into text, using the currency
//! symbol and date format from the user's settings.

pub mod budget;
pub mod expense;
pub mod history;

pub use budget::{format_budget_details, format_budget_table, format_status};
pub use expense::format_expense_list;
pub use history::format_history;

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// An amount with the configured currency symbol
pub(crate) fn money(settings: &Settings, amount: Money) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// A date in the configured format, or `YYYY-MM-DD` if that format
/// can't be rendered
pub(crate) fn date(settings: &Settings, day: NaiveDate) -> String {
    let mut rendered = String::new();
    match write!(rendered, "{}", day.format(&settings.date_format)) {
        Ok(()) => rendered,
        Err(_) => day.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_uses_configured_format() {
        let settings = Settings {
            date_format: "%d.%m.%Y".into(),
            ..Settings::default()
        };
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(date(&settings, day), "01.03.2025");
    }

    #[test]
    fn test_unrenderable_format_falls_back() {
        let settings = Settings {
            date_format: "%Q".into(),
            ..Settings::default()
        };
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(date(&settings, day), "2025-03-01");
    }
}
