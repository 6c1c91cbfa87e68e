//! Periodic Summary
//!
//! Income and expenses per category for the current month or year.

use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::BudgetResult;
use crate::models::{CategoryTotals, SummaryPeriod, Transaction};

/// Income and expense totals for one category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryFlow {
    /// Sum of positive amounts
    pub income: f64,
    /// Sum of absolute values of negative amounts
    pub expenses: f64,
}

impl CategoryFlow {
    fn record(&mut self, amount: f64) {
        if amount > 0.0 {
            self.income += amount;
        } else {
            self.expenses += amount.abs();
        }
    }
}

/// Summary of the window `[start, end]`
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub period: SummaryPeriod,
    /// Window start (inclusive)
    pub start: NaiveDateTime,
    /// Window end (inclusive), the time the summary was taken
    pub end: NaiveDateTime,
    /// Per-category totals in first-seen order within the window
    pub categories: CategoryTotals<CategoryFlow>,
}

impl PeriodSummary {
    /// Summarize the transactions that fall inside the period ending at `now`
    ///
    /// Transactions whose stored timestamp doesn't parse can't be placed in
    /// the window and are left out.
    pub fn generate<'a, I>(transactions: I, period: SummaryPeriod, now: NaiveDateTime) -> BudgetResult<Self>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let start = period.window_start(now)?;
        let mut categories: CategoryTotals<CategoryFlow> = CategoryTotals::new();

        for txn in transactions {
            let Some(ts) = txn.timestamp.datetime() else {
                warn!(
                    timestamp = %txn.timestamp,
                    category = %txn.category,
                    "timestamp not recognised, left out of summary"
                );
                continue;
            };
            if ts >= start && ts <= now {
                categories.entry(&txn.category).record(txn.amount);
            }
        }

        Ok(Self {
            period,
            start,
            end: now,
            categories,
        })
    }

    /// Totals for one category
    pub fn get(&self, category: &str) -> Option<CategoryFlow> {
        self.categories.get(category).copied()
    }

    /// Income across all categories
    pub fn total_income(&self) -> f64 {
        self.categories.values().map(|f| f.income).sum()
    }

    /// Expenses across all categories
    pub fn total_expenses(&self) -> f64 {
        self.categories.values().map(|f| f.expenses).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timestamp;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn txn(ts: NaiveDateTime, category: &str, amount: f64) -> Transaction {
        Transaction::with_timestamp(ts, category, amount, "")
    }

    #[test]
    fn test_monthly_window() {
        let now = at(2025, 5, 20, 12);
        let txns = vec![
            txn(at(2025, 4, 30, 23), "Salary", 1000.0),
            txn(at(2025, 5, 1, 12), "Salary", 2000.0),
            txn(at(2025, 5, 10, 9), "Rent", -800.0),
            txn(at(2025, 5, 10, 9), "Salary", -50.0),
            txn(at(2025, 5, 21, 9), "Rent", -1.0),
        ];

        let summary = PeriodSummary::generate(&txns, SummaryPeriod::Monthly, now).unwrap();

        assert_eq!(summary.start, at(2025, 5, 1, 12));
        assert_eq!(summary.end, now);
        let names: Vec<_> = summary.categories.categories().collect();
        assert_eq!(names, vec!["Salary", "Rent"]);
        assert_eq!(
            summary.get("Salary"),
            Some(CategoryFlow {
                income: 2000.0,
                expenses: 50.0
            })
        );
        assert_eq!(
            summary.get("Rent"),
            Some(CategoryFlow {
                income: 0.0,
                expenses: 800.0
            })
        );
        assert_eq!(summary.total_income(), 2000.0);
        assert_eq!(summary.total_expenses(), 850.0);
    }

    #[test]
    fn test_first_of_month_window_starts_at_current_time_of_day() {
        let now = at(2025, 5, 1, 12);
        let txns = vec![
            txn(at(2025, 5, 1, 8), "Early", -5.0),
            txn(at(2025, 5, 1, 12), "Exact", -7.0),
        ];

        let summary = PeriodSummary::generate(&txns, SummaryPeriod::Monthly, now).unwrap();

        assert_eq!(summary.get("Early"), None);
        assert_eq!(summary.get("Exact").map(|f| f.expenses), Some(7.0));
    }

    #[test]
    fn test_yearly_window() {
        let now = at(2025, 6, 15, 10);
        let txns = vec![
            txn(at(2024, 12, 31, 23), "Bonus", 500.0),
            txn(at(2025, 1, 1, 10), "Bonus", 300.0),
            txn(at(2025, 3, 3, 3), "Fuel", -60.0),
        ];

        let summary = PeriodSummary::generate(&txns, SummaryPeriod::Yearly, now).unwrap();

        assert_eq!(summary.start, at(2025, 1, 1, 10));
        assert_eq!(summary.get("Bonus").map(|f| f.income), Some(300.0));
        assert_eq!(summary.get("Fuel").map(|f| f.expenses), Some(60.0));
    }

    #[test]
    fn test_unparseable_timestamp_is_left_out() {
        let now = at(2025, 5, 20, 12);
        let txns = vec![
            txn(at(2025, 5, 2, 12), "Salary", 100.0),
            Transaction::with_timestamp(Timestamp::parse("05/02/2025"), "Rent", -50.0, ""),
        ];

        let summary = PeriodSummary::generate(&txns, SummaryPeriod::Monthly, now).unwrap();

        assert_eq!(summary.get("Salary").map(|f| f.income), Some(100.0));
        assert_eq!(summary.get("Rent"), None);
    }

    #[test]
    fn test_zero_amount_adds_nothing() {
        let now = at(2025, 5, 20, 12);
        let txns = vec![txn(at(2025, 5, 2, 12), "Misc", 0.0)];

        let summary = PeriodSummary::generate(&txns, SummaryPeriod::Monthly, now).unwrap();

        assert_eq!(summary.get("Misc"), Some(CategoryFlow::default()));
    }
}
