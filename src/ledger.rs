//! The transaction ledger
//!
//! [`Ledger`] owns the ordered sequence of transactions, loads it once from
//! its store when opened, and rewrites the whole store after every
//! mutation. All reports are computed on demand from the in-memory sequence.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::{debug, error, info, warn};

use crate::error::BudgetResult;
use crate::models::{current_timestamp, SummaryPeriod, Transaction};
use crate::reports::{ExpenseBreakdown, PeriodSummary};
use crate::storage::{FlatFileStore, SkippedLine, TransactionStore};

/// Outcome of the most recent load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No store existed; the ledger starts empty
    Fresh,
    /// Store was read (possibly with skipped lines)
    Loaded,
    /// Store exists but could not be read; the ledger starts empty
    Failed(String),
}

/// In-memory transaction sequence bound to a backing store
#[derive(Debug)]
pub struct Ledger<S: TransactionStore = FlatFileStore> {
    store: S,
    transactions: Vec<Transaction>,
    status: LoadStatus,
    skipped: Vec<SkippedLine>,
}

impl Ledger<FlatFileStore> {
    /// Open the flat-file ledger at `path`
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::open(FlatFileStore::new(path))
    }
}

impl<S: TransactionStore> Ledger<S> {
    /// Create a ledger over `store` and load it eagerly
    ///
    /// Never fails: a missing store gives an empty ledger, an unreadable one
    /// gives an empty ledger with [`LoadStatus::Failed`].
    pub fn open(store: S) -> Self {
        let mut ledger = Self {
            store,
            transactions: Vec::new(),
            status: LoadStatus::Fresh,
            skipped: Vec::new(),
        };
        ledger.load();
        ledger
    }

    /// Replace the in-memory sequence with the store's contents
    pub fn load(&mut self) -> &LoadStatus {
        let location = self.store.location();

        match self.store.load() {
            Ok(report) => {
                for skipped in &report.skipped {
                    warn!(store = %location, line = skipped.line, reason = %skipped.reason, "skipping malformed record");
                }
                self.status = if report.fresh {
                    info!(store = %location, "store not found, starting with a new budget");
                    LoadStatus::Fresh
                } else {
                    debug!(store = %location, count = report.transactions.len(), "loaded transactions");
                    LoadStatus::Loaded
                };
                self.transactions = report.transactions;
                self.skipped = report.skipped;
            }
            Err(e) => {
                error!(store = %location, error = %e, "failed to load store");
                self.transactions.clear();
                self.skipped.clear();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }

        &self.status
    }

    /// Write the full sequence to the store
    pub fn save(&self) -> BudgetResult<()> {
        self.store.save(&self.transactions).map_err(|e| {
            error!(store = %self.store.location(), error = %e, "failed to save store");
            e
        })
    }

    /// Record a transaction stamped with the current local time and persist
    pub fn add_transaction(
        &mut self,
        category: &str,
        amount: f64,
        description: &str,
    ) -> BudgetResult<&Transaction> {
        self.add_transaction_at(current_timestamp(), category, amount, description)
    }

    /// Record a transaction with an explicit timestamp and persist
    ///
    /// The transaction stays in memory even when the save fails; the error
    /// is returned so the caller can report it.
    pub fn add_transaction_at(
        &mut self,
        timestamp: NaiveDateTime,
        category: &str,
        amount: f64,
        description: &str,
    ) -> BudgetResult<&Transaction> {
        let txn = Transaction::with_timestamp(timestamp, category, amount, description);
        debug!(category = %txn.category, amount = txn.amount, "adding transaction");
        self.transactions.push(txn);
        self.save()?;
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Sum of all amounts
    pub fn calculate_balance(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Transactions in ledger order, optionally restricted to one category
    ///
    /// The view's balance always covers the whole ledger.
    pub fn display_transactions<'a>(&'a self, filter_category: Option<&'a str>) -> TransactionView<'a> {
        TransactionView {
            transactions: &self.transactions,
            filter: filter_category,
            balance: self.calculate_balance(),
        }
    }

    /// Spending per category across the whole ledger
    pub fn categorize_expenses(&self) -> ExpenseBreakdown {
        ExpenseBreakdown::generate(&self.transactions)
    }

    /// Summary for `"monthly"` or `"yearly"` ending now
    ///
    /// Returns `Ok(None)` when the ledger is empty, before the period is
    /// even looked at. Any other period is rejected.
    pub fn generate_summary(&self, period: &str) -> BudgetResult<Option<PeriodSummary>> {
        if self.transactions.is_empty() {
            info!("no transactions to summarize");
            return Ok(None);
        }

        let period: SummaryPeriod = period.parse()?;
        self.summarize_at(period, current_timestamp()).map(Some)
    }

    /// Summary for `period` with an explicit "now"
    pub fn summarize_at(&self, period: SummaryPeriod, now: NaiveDateTime) -> BudgetResult<PeriodSummary> {
        PeriodSummary::generate(&self.transactions, period, now)
    }

    /// All transactions in ledger order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Outcome of the last load
    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    /// Records dropped by the last load
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Filtered, restartable view of the ledger's transactions
#[derive(Debug, Clone, Copy)]
pub struct TransactionView<'a> {
    transactions: &'a [Transaction],
    filter: Option<&'a str>,
    /// Balance of the entire ledger, not just the filtered rows
    pub balance: f64,
}

impl<'a> TransactionView<'a> {
    /// Iterate the matching transactions; can be called repeatedly
    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + 'a {
        let (transactions, filter) = (self.transactions, self.filter);
        transactions
            .iter()
            .filter(move |t| filter.map_or(true, |c| t.category == c))
    }

    /// Number of matching transactions
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Category filter, if any
    pub fn filter(&self) -> Option<&'a str> {
        self.filter
    }
}
