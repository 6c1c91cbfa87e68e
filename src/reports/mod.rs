//! Reports module for the household budget
//!
//! Read-only computations over the ledger's transactions: the expense
//! breakdown by category and the monthly/yearly summary.

pub mod expenses;
pub mod summary;

pub use expenses::ExpenseBreakdown;
pub use summary::{CategoryFlow, PeriodSummary};
