//! Expense CLI commands

use clap::Subcommand;

use crate::display::{format_expense_list, format_status};
use crate::error::{TiccleError, TiccleResult};
use crate::models::Expense;
use crate::services::BudgetTracker;
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today, timestamp_for};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "4500" or "4,500")
        amount: String,
        /// Day of the expense (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Memo
        #[arg(short, long)]
        memo: Option<String>,
    },

    /// List the expenses of a day
    List {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (e.g., "exp-1a2b3c4d")
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: Storage>(
    tracker: &BudgetTracker<S>,
    cmd: ExpenseCommands,
) -> TiccleResult<()> {
    let settings = tracker.settings();

    match cmd {
        ExpenseCommands::Add { amount, date, memo } => {
            let amount = parse_amount(&amount, &settings.currency_symbol)?;
            let day = parse_date_or_today(date.as_deref())?;

            let mut expense = Expense::at(amount, timestamp_for(day)?)
                .map_err(|e| TiccleError::Validation(e.to_string()))?;
            if let Some(memo) = memo {
                expense = expense.with_memo(memo);
            }

            let expense = tracker.add_expense(expense)?;
            println!(
                "Recorded {} on {} ({})",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.day(),
                expense.id
            );

            let day = expense.day();
            if tracker.budget(day)?.is_some() {
                print!("{}", format_status(day, &tracker.status(day), settings));
            } else {
                println!("No budget set for {}", day);
            }
        }

        ExpenseCommands::List { date } => {
            let day = parse_date_or_today(date.as_deref())?;
            print!(
                "{}",
                format_expense_list(&tracker.expenses_for_day(day)?, settings)
            );
        }

        ExpenseCommands::Delete { id } => {
            let expense = tracker.find_expense(&id)?;
            let removed = tracker.delete_expense(expense.id)?;
            println!(
                "Deleted {} expense from {} ({})",
                removed.amount.format_with_symbol(&settings.currency_symbol),
                removed.day(),
                removed.id
            );
        }
    }

    Ok(())
}
