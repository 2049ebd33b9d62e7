//! Budget CLI commands

use clap::Subcommand;

use crate::display::{format_budget_details, format_budget_table, format_status};
use crate::error::TiccleResult;
use crate::services::BudgetTracker;
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today, parse_month_or_current};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for one or more days
    Set {
        /// Amount (e.g., "30000" or "30,000")
        amount: String,
        /// Day to set (YYYY-MM-DD), repeatable; defaults to today
        #[arg(short, long = "date")]
        dates: Vec<String>,
    },

    /// Spread a monthly budget over the days that have none yet
    Month {
        /// Amount for the whole month
        amount: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the budget for a day
    Show {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the budgets of a month
    List {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID (e.g., "bud-1a2b3c4d")
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: Storage>(
    tracker: &BudgetTracker<S>,
    cmd: BudgetCommands,
) -> TiccleResult<()> {
    let settings = tracker.settings();

    match cmd {
        BudgetCommands::Set { amount, dates } => {
            let amount = parse_amount(&amount, &settings.currency_symbol)?;
            let dates = if dates.is_empty() {
                vec![parse_date_or_today(None)?]
            } else {
                dates
                    .iter()
                    .map(|d| parse_date_or_today(Some(d)))
                    .collect::<TiccleResult<Vec<_>>>()?
            };

            for budget in tracker.set_budget_for_dates(&dates, amount)? {
                println!(
                    "Set budget for {} to {} ({})",
                    budget.date,
                    budget.amount.format_with_symbol(&settings.currency_symbol),
                    budget.id
                );
            }
        }

        BudgetCommands::Month { amount, month } => {
            let amount = parse_amount(&amount, &settings.currency_symbol)?;
            let (year, month) = parse_month_or_current(month.as_deref())?;

            let created = tracker.set_monthly_budget(year, month, amount)?;
            match created.first() {
                Some(first) => println!(
                    "Set {} per day on {} day(s) of {}-{:02}",
                    first.amount.format_with_symbol(&settings.currency_symbol),
                    created.len(),
                    year,
                    month
                ),
                None => println!("Every day of {}-{:02} already has a budget", year, month),
            }
        }

        BudgetCommands::Show { date } => {
            let date = parse_date_or_today(date.as_deref())?;
            match tracker.budget(date)? {
                Some(budget) => {
                    print!("{}", format_budget_details(&budget, settings));
                    println!();
                    print!("{}", format_status(date, &tracker.status(date), settings));
                }
                None => println!("No budget set for {}", date),
            }
        }

        BudgetCommands::List { month } => {
            let (year, month) = parse_month_or_current(month.as_deref())?;
            let budgets: Vec<_> = tracker
                .monthly_budgets(year, month)?
                .into_values()
                .collect();
            println!("{}", format_budget_table(&budgets, settings));
        }

        BudgetCommands::Delete { id } => {
            let budget = tracker.find_budget(&id)?;
            let removed = tracker.delete_budget(budget.id)?;
            println!("Deleted budget for {} ({})", removed.date, removed.id);
        }
    }

    Ok(())
}
