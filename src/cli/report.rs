//! CLI commands for reports
//!
//! Expense breakdown and monthly/yearly summaries.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_breakdown, format_period_summary};
use crate::error::BudgetResult;
use crate::ledger::Ledger;
use crate::storage::TransactionStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Analyze expenses by category
    #[command(alias = "breakdown")]
    Expenses,

    /// Summarize income and expenses for the current month or year
    Summary {
        /// "monthly" or "yearly"
        #[arg(default_value = "monthly")]
        period: String,
    },
}

/// Handle report commands
pub fn handle_report_command<S: TransactionStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    match cmd {
        ReportCommands::Expenses => {
            let report = ledger.categorize_expenses();
            print!("{}", format_expense_breakdown(&report, &settings.currency_symbol));
            Ok(())
        }
        ReportCommands::Summary { period } => {
            let period = period.trim().to_lowercase();
            match ledger.generate_summary(&period)? {
                Some(summary) => {
                    print!("{}", format_period_summary(&summary, &settings.currency_symbol));
                }
                None => println!("No transactions to summarize."),
            }
            Ok(())
        }
    }
}
