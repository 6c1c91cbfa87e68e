//! Display formatting for terminal output
//!
//! Turns ledger views and reports into the text the CLI prints.

pub mod report;
pub mod transaction;

pub use report::{format_expense_breakdown, format_money, format_period_summary};
pub use transaction::{format_transaction_table, format_transaction_view};
