//! Transaction model
//!
//! A single recorded income or expense. Positive amounts are income,
//! negative amounts are expenses.
//!
//! Timestamps keep the text they were stored with. A stored timestamp that
//! doesn't parse still loads and still counts towards balances; it is only
//! left out of period summaries.

use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;

/// Format used for timestamps, both in memory and in the store
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Entry time as stored, with its parsed value when it has one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    text: String,
    parsed: Option<NaiveDateTime>,
}

impl Timestamp {
    /// Read a stored timestamp, keeping the text exactly as given
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            parsed: parse_timestamp(text),
        }
    }

    /// The stored text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parsed value, `None` if the text is not `YYYY-MM-DD HH:MM:SS`
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.parsed
    }
}

impl From<NaiveDateTime> for Timestamp {
    /// Sub-second precision is dropped so the value survives a store round trip.
    fn from(ts: NaiveDateTime) -> Self {
        let ts = truncate_to_seconds(ts);
        Self {
            text: ts.format(TIMESTAMP_FORMAT).to_string(),
            parsed: Some(ts),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A recorded monetary event
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the transaction was entered (local time, whole seconds)
    pub timestamp: Timestamp,

    /// Free-form category label
    pub category: String,

    /// Amount (positive for income, negative for expense)
    pub amount: f64,

    /// Notes, may be empty
    pub description: String,
}

impl Transaction {
    /// Create a transaction with an explicit timestamp
    pub fn with_timestamp(
        timestamp: impl Into<Timestamp>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Timestamp as stored
    pub fn timestamp_str(&self) -> &str {
        self.timestamp.as_str()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.timestamp,
            self.category,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Current local wall-clock time at second precision
pub fn current_timestamp() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

/// Parse a timestamp in the store format
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}
