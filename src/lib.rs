//! Household budget ledger
//!
//! Records income and expense transactions, keeps them in a flat text file,
//! and reports balances, per-category expenses, and monthly/yearly
//! summaries.
//!
//! # Architecture
//!
//! - `models`: transactions, summary periods, ordered category totals
//! - `storage`: the `TransactionStore` trait and the flat-file store
//! - `ledger`: the in-memory sequence and its operations
//! - `reports`: expense breakdown and periodic summary
//! - `display`: terminal formatting
//! - `config`: user settings
//! - `cli`: clap subcommands used by the `budget` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use household_budget::Ledger;
//!
//! let mut ledger = Ledger::open_file("budget_data.txt");
//! ledger.add_transaction("Salary", 50000.0, "May pay")?;
//! ledger.add_transaction("Rent", -15000.0, "")?;
//! assert_eq!(ledger.calculate_balance(), 35000.0);
//! # Ok::<(), household_budget::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use ledger::{Ledger, LoadStatus, TransactionView};
pub use logging::init_tracing;
