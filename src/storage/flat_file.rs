//! Flat text file store
//!
//! One transaction per line:
//!
//! ```text
//! <timestamp>,<category>,<amount>,<description>
//! ```
//!
//! There is no quoting or escaping, so fields must not contain commas.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Timestamp, Transaction};

use super::file_io::write_atomic;
use super::{LoadReport, SkipReason, SkippedLine, TransactionStore};

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "budget_data.txt";

const FIELD_COUNT: usize = 4;

/// Comma-separated store that is rewritten in full on every save
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FlatFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl TransactionStore for FlatFileStore {
    fn load(&self) -> BudgetResult<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport::fresh());
        }

        let file = File::open(&self.path).map_err(|e| {
            BudgetError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(BufReader::new(file));

        let mut report = LoadReport::default();
        let mut record = StringRecord::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    if is_blank(&record) {
                        continue;
                    }
                    match parse_record(&record) {
                        Ok(txn) => report.transactions.push(txn),
                        Err(reason) => report.skipped.push(SkippedLine {
                            line,
                            content: join_fields(&record),
                            reason,
                        }),
                    }
                }
                Err(e) if e.is_io_error() => {
                    return Err(BudgetError::Storage(format!(
                        "Failed to read {}: {}",
                        self.path.display(),
                        e
                    )));
                }
                Err(e) => {
                    // The reader only hands back the line it failed on, not its bytes.
                    let line = e.position().map(|p| p.line()).unwrap_or_default();
                    report.skipped.push(SkippedLine {
                        line,
                        content: String::from("<not valid UTF-8>"),
                        reason: SkipReason::InvalidEncoding,
                    });
                }
            }
        }

        Ok(report)
    }

    fn save(&self, transactions: &[Transaction]) -> BudgetResult<()> {
        write_atomic(&self.path, |file| {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .quote_style(QuoteStyle::Never)
                .from_writer(file);

            for txn in transactions {
                writer
                    .write_record(&encode_record(txn))
                    .map_err(|e| BudgetError::Storage(format!("Failed to write record: {}", e)))?;
            }

            writer
                .flush()
                .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fields of a transaction in store order
fn encode_record(txn: &Transaction) -> [String; FIELD_COUNT] {
    [
        txn.timestamp_str().to_string(),
        txn.category.clone(),
        txn.amount.to_string(),
        txn.description.clone(),
    ]
}

fn parse_record(record: &StringRecord) -> Result<Transaction, SkipReason> {
    if record.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(record.len()));
    }

    // Whitespace around the whole line is not part of any field.
    let timestamp = Timestamp::parse(record[0].trim_start());
    let amount: f64 = record[2]
        .trim()
        .parse()
        .map_err(|_| SkipReason::InvalidAmount)?;

    Ok(Transaction::with_timestamp(
        timestamp,
        &record[1],
        amount,
        record[3].trim_end(),
    ))
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty()) && record.len() <= 1
}

fn join_fields(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
