//! Report formatting utilities for terminal output

use crate::reports::{ExpenseBreakdown, PeriodSummary};

/// Format an amount with a currency symbol and two decimals
pub fn format_money(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Format the expense breakdown, one line per category
pub fn format_expense_breakdown(report: &ExpenseBreakdown, symbol: &str) -> String {
    let mut output = String::from("Expense Breakdown:\n");

    if report.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    for (category, total) in report.categories.iter() {
        output.push_str(&format!("- {}: {}\n", category, format_money(*total, symbol)));
    }

    output
}

/// Format a periodic summary with its date range header
pub fn format_period_summary(summary: &PeriodSummary, symbol: &str) -> String {
    let mut output = format!(
        "{} Summary ({} - {}):\n",
        summary.period.title(),
        summary.start.format("%Y-%m-%d"),
        summary.end.format("%Y-%m-%d")
    );

    if summary.categories.is_empty() {
        output.push_str("No transactions in this period.\n");
        return output;
    }

    for (category, flow) in summary.categories.iter() {
        output.push_str(&format!(
            "- {}: Income: {}, Expenses: {}\n",
            category,
            format_money(flow.income, symbol),
            format_money(flow.expenses, symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SummaryPeriod, Transaction};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(32500.0, "₹"), "₹32500.00");
        assert_eq!(format_money(-2.5, "$"), "$-2.50");
    }

    #[test]
    fn test_expense_breakdown_lines() {
        let txns = vec![
            Transaction::with_timestamp(at(1), "Rent", -15000.0, ""),
            Transaction::with_timestamp(at(2), "Groceries", -2500.0, "weekly"),
        ];
        let report = ExpenseBreakdown::generate(&txns);

        assert_eq!(
            format_expense_breakdown(&report, "₹"),
            "Expense Breakdown:\n- Rent: ₹15000.00\n- Groceries: ₹2500.00\n"
        );
    }

    #[test]
    fn test_period_summary_lines() {
        let txns = vec![
            Transaction::with_timestamp(at(2), "Salary", 50000.0, ""),
            Transaction::with_timestamp(at(3), "Rent", -15000.0, ""),
        ];
        let summary = PeriodSummary::generate(&txns, SummaryPeriod::Monthly, at(20)).unwrap();

        assert_eq!(
            format_period_summary(&summary, "₹"),
            "Monthly Summary (2025-05-01 - 2025-05-20):\n\
             - Salary: Income: ₹50000.00, Expenses: ₹0.00\n\
             - Rent: Income: ₹0.00, Expenses: ₹15000.00\n"
        );
    }
}
