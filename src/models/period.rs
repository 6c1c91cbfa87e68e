//! Summary period representation
//!
//! A summary window runs from the start of the current month or year up to
//! "now". The start keeps the current time of day, so on the first day of a
//! period the window only reaches back to the same clock time.

use chrono::{Datelike, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Period covered by a summary report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryPeriod {
    /// From day 1 of the current month
    Monthly,
    /// From January 1 of the current year
    Yearly,
}

impl SummaryPeriod {
    /// Start of the window ending at `now`
    pub fn window_start(&self, now: NaiveDateTime) -> Result<NaiveDateTime, BudgetError> {
        let start = match self {
            Self::Monthly => now.with_day(1),
            Self::Yearly => now.with_day(1).and_then(|d| d.with_month(1)),
        };
        start.ok_or_else(|| {
            BudgetError::Validation(format!("Cannot compute {} window from {}", self, now))
        })
    }

    /// Label used in report headers ("Monthly", "Yearly")
    pub fn title(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for SummaryPeriod {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(BudgetError::InvalidPeriod(other.to_string())),
        }
    }
}
