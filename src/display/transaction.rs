//! Transaction display formatting
//!
//! Renders a [`TransactionView`] as a table followed by the ledger balance.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::ledger::TransactionView;
use crate::models::Transaction;

use super::report::format_money;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            timestamp: txn.timestamp_str().to_string(),
            category: txn.category.clone(),
            amount: format!("{:.2}", txn.amount),
            description: txn.description.clone(),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions.into_iter().map(TransactionRow::from).collect();
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a view: heading, matching rows, and the overall balance
pub fn format_transaction_view(view: &TransactionView<'_>, symbol: &str) -> String {
    let mut output = String::new();

    match view.filter() {
        Some(category) => output.push_str(&format!("Transactions ({}):\n", category)),
        None => output.push_str("Transactions:\n"),
    }
    output.push_str(&format_transaction_table(view.iter()));
    output.push_str(&format!(
        "Current Balance: {}\n",
        format_money(view.balance, symbol)
    ));

    output
}
