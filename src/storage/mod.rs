//! Storage layer for the household budget
//!
//! The ledger talks to its backing store through [`TransactionStore`], which
//! only knows how to load the whole sequence and save the whole sequence.
//! [`FlatFileStore`] is the comma-separated text file implementation.

pub mod file_io;
pub mod flat_file;

pub use file_io::write_atomic;
pub use flat_file::FlatFileStore;

use std::fmt;

use crate::error::BudgetResult;
use crate::models::Transaction;

/// Whole-sequence persistence for transactions
pub trait TransactionStore {
    /// Read every stored transaction
    ///
    /// Malformed records are reported in the returned [`LoadReport`] rather
    /// than failing the load.
    fn load(&self) -> BudgetResult<LoadReport>;

    /// Replace the stored sequence with `transactions`
    fn save(&self, transactions: &[Transaction]) -> BudgetResult<()>;

    /// Human-readable location, used in messages
    fn location(&self) -> String;
}

/// Why a stored record was dropped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Record did not have exactly four fields
    FieldCount(usize),
    /// Amount field is not a number
    InvalidAmount,
    /// Record is not valid UTF-8; its text is not kept
    InvalidEncoding,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 4 fields, found {}", n),
            Self::InvalidAmount => write!(f, "invalid amount"),
            Self::InvalidEncoding => write!(f, "invalid UTF-8"),
        }
    }
}

/// A record dropped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the store
    pub line: u64,
    /// Raw text of the record
    pub content: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping line {} ({}): {}",
            self.line, self.reason, self.content
        )
    }
}

/// Result of loading a store
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Valid records in store order
    pub transactions: Vec<Transaction>,
    /// True when no store existed and the ledger starts empty
    pub fresh: bool,
    /// Records that were dropped
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Report for a store that does not exist yet
    pub fn fresh() -> Self {
        Self {
            fresh: true,
            ..Self::default()
        }
    }
}
