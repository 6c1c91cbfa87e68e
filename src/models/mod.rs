//! Core data models for the household budget
//!
//! This module contains the data structures that represent the ledger
//! domain: transactions, summary periods, and per-category totals.

pub mod period;
pub mod totals;
pub mod transaction;

pub use period::SummaryPeriod;
pub use totals::CategoryTotals;
pub use transaction::{
    current_timestamp, parse_timestamp, Timestamp, Transaction, TIMESTAMP_FORMAT,
};
