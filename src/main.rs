use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ticcle::audit::AuditLogger;
use ticcle::cli::{
    handle_budget_command, handle_expense_command, handle_history_command, handle_status_command,
    BudgetCommands, ExpenseCommands,
};
use ticcle::config::{Settings, TicclePaths};
use ticcle::services::BudgetTracker;
use ticcle::storage::FileStorage;

/// Environment variable holding the log filter, e.g. `TICCLE_LOG=debug`
const LOG_ENV: &str = "TICCLE_LOG";

#[derive(Parser)]
#[command(
    name = "ticcle",
    version,
    about = "Daily budget tracker with carry-over",
    long_about = "Ticcle gives every day its own budget. Whatever is left at the end \
                  of a day (or overspent) carries over into the next one."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show where a day's budget stands
    Status {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show recent days of budgets and spending
    History {
        /// Number of days back from today
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Show the most recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = TicclePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let audit = AuditLogger::new(paths.audit_log());
    let storage = Arc::new(FileStorage::from_paths(&paths));
    let tracker = BudgetTracker::new(storage, settings).with_audit(audit.clone());

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&tracker, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&tracker, cmd)?,
        Some(Commands::Status { date }) => handle_status_command(&tracker, date)?,
        Some(Commands::History { days }) => handle_history_command(&tracker, days)?,
        Some(Commands::Audit { count }) => {
            let entries = audit.read_recent(count)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            let settings = tracker.settings();
            println!("Ticcle Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {} ({} entries)", audit.path().display(), audit.entry_count()?);
            println!();
            println!("Settings:");
            println!("  Carry-over policy: {}", settings.carry_over_policy);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  History days:      {}", settings.history_days);
        }
        None => {
            println!("Ticcle - daily budget tracker");
            println!();
            println!("Run 'ticcle --help' for usage information.");
        }
    }

    Ok(())
}
