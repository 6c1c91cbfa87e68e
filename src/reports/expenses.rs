//! Expense Breakdown
//!
//! Totals spending per category across the whole ledger.

use crate::models::{CategoryTotals, Transaction};

/// Absolute spending per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseBreakdown {
    /// Positive totals; categories without expenses are absent
    pub categories: CategoryTotals<f64>,
}

impl ExpenseBreakdown {
    /// Build the breakdown from transactions in ledger order
    ///
    /// Income and zero-amount transactions are ignored.
    pub fn generate<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut categories = CategoryTotals::new();
        for txn in transactions.into_iter().filter(|t| t.is_expense()) {
            *categories.entry(&txn.category) += txn.amount.abs();
        }
        Self { categories }
    }

    /// Spending for one category, if it has any
    pub fn get(&self, category: &str) -> Option<f64> {
        self.categories.get(category).copied()
    }

    /// Sum over all categories
    pub fn total(&self) -> f64 {
        self.categories.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(category: &str, amount: f64) -> Transaction {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Transaction::with_timestamp(ts, category, amount, "")
    }

    #[test]
    fn test_groups_expenses_by_category() {
        let txns = vec![
            txn("Salary", 50000.0),
            txn("Rent", -15000.0),
            txn("Groceries", -2000.0),
            txn("Rent", -100.0),
            txn("Groceries", -500.0),
        ];

        let report = ExpenseBreakdown::generate(&txns);

        let rows: Vec<_> = report.categories.iter().map(|(c, v)| (c, *v)).collect();
        assert_eq!(rows, vec![("Rent", 15100.0), ("Groceries", 2500.0)]);
        assert_eq!(report.total(), 17600.0);
    }

    #[test]
    fn test_income_and_zero_never_appear() {
        let txns = vec![txn("Salary", 10.0), txn("Misc", 0.0), txn("Gift", 5.0)];

        let report = ExpenseBreakdown::generate(&txns);

        assert!(report.is_empty());
        assert_eq!(report.get("Misc"), None);
        assert_eq!(report.total(), 0.0);
    }

    #[test]
    fn test_category_with_mixed_signs_only_counts_expenses() {
        let txns = vec![txn("Refunds", 30.0), txn("Refunds", -12.5)];

        let report = ExpenseBreakdown::generate(&txns);

        assert_eq!(report.get("Refunds"), Some(12.5));
    }
}
