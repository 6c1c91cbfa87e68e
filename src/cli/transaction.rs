//! Transaction CLI commands
//!
//! Adding transactions and listing the ledger.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_money, format_transaction_view};
use crate::error::{BudgetError, BudgetResult};
use crate::ledger::Ledger;
use crate::storage::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a transaction (positive for income, negative for expense)
    Add {
        /// Category (e.g., Salary, Rent, Groceries)
        category: String,
        /// Amount, e.g. "50000" or "-2500.50"
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Add income; the amount is recorded as positive
    Income {
        /// Category (e.g., Salary)
        category: String,
        /// Amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Add an expense; the amount is recorded as negative
    Expense {
        /// Category (e.g., Rent, Groceries)
        category: String,
        /// Amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List transactions with the current balance
    #[command(alias = "ls")]
    List {
        /// Only show this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the current balance
    Balance,
}

/// Sign applied to an entered amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    AsEntered,
    Income,
    Expense,
}

/// Handle a transaction command
pub fn handle_transaction_command<S: TransactionStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            description,
        } => add(ledger, &category, &amount, &description, Sign::AsEntered),
        TransactionCommands::Income {
            category,
            amount,
            description,
        } => add(ledger, &category, &amount, &description, Sign::Income),
        TransactionCommands::Expense {
            category,
            amount,
            description,
        } => add(ledger, &category, &amount, &description, Sign::Expense),
        TransactionCommands::List { category } => {
            // An empty filter means "all", as when the prompt is left blank
            let filter = category.as_deref().filter(|c| !c.is_empty());
            let view = ledger.display_transactions(filter);
            print!("{}", format_transaction_view(&view, &settings.currency_symbol));
            Ok(())
        }
        TransactionCommands::Balance => {
            println!(
                "Current Balance: {}",
                format_money(ledger.calculate_balance(), &settings.currency_symbol)
            );
            Ok(())
        }
    }
}

fn add<S: TransactionStore>(
    ledger: &mut Ledger<S>,
    category: &str,
    amount: &str,
    description: &str,
    sign: Sign,
) -> BudgetResult<()> {
    let category = validate_category(category)?;
    validate_text_field("Description", description)?;
    let amount = parse_amount(amount)?;
    let amount = match sign {
        Sign::AsEntered => amount,
        Sign::Income => amount.abs(),
        Sign::Expense => -amount.abs(),
    };

    let txn = ledger.add_transaction(category, amount, description)?;
    println!("Transaction added successfully!");
    println!("  {}", txn);
    Ok(())
}

/// Parse an entered amount
pub fn parse_amount(input: &str) -> BudgetResult<f64> {
    let amount: f64 = input.trim().parse().map_err(|_| {
        BudgetError::Validation(format!(
            "Invalid amount '{}'. Please enter a number.",
            input
        ))
    })?;

    if !amount.is_finite() {
        return Err(BudgetError::Validation(format!(
            "Invalid amount '{}'. Please enter a finite number.",
            input
        )));
    }

    Ok(amount)
}

/// Check a category before it is stored
pub fn validate_category(input: &str) -> BudgetResult<&str> {
    let category = input.trim();
    if category.is_empty() {
        return Err(BudgetError::Validation("Category cannot be empty".into()));
    }
    validate_text_field("Category", category)?;
    Ok(category)
}

/// Reject characters the store format cannot hold
pub fn validate_text_field(name: &str, value: &str) -> BudgetResult<()> {
    if value.contains([',', '\n', '\r']) {
        return Err(BudgetError::Validation(format!(
            "{} cannot contain commas or line breaks",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Ledger, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            store_file: temp_dir.path().join("budget_data.txt"),
            ..Settings::default()
        };
        let ledger = Ledger::open_file(&settings.store_file);
        (temp_dir, ledger, settings)
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50000").unwrap(), 50000.0);
        assert_eq!(parse_amount(" -2500.5 ").unwrap(), -2500.5);
        assert!(parse_amount("ten").unwrap_err().is_validation());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category("  Rent ").unwrap(), "Rent");
        assert!(validate_category("   ").is_err());
        assert!(validate_category("Rent,Water").is_err());
        assert!(validate_text_field("Description", "line\nbreak").is_err());
        assert!(validate_text_field("Description", "").is_ok());
    }

    #[test]
    fn test_income_and_expense_force_sign() {
        let (_temp_dir, mut ledger, settings) = setup();

        handle_transaction_command(
            &mut ledger,
            &settings,
            TransactionCommands::Income {
                category: "Salary".into(),
                amount: "-100".into(),
                description: String::new(),
            },
        )
        .unwrap();
        handle_transaction_command(
            &mut ledger,
            &settings,
            TransactionCommands::Expense {
                category: "Rent".into(),
                amount: "40".into(),
                description: "June".into(),
            },
        )
        .unwrap();

        let amounts: Vec<_> = ledger.transactions().iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![100.0, -40.0]);
    }

    #[test]
    fn test_rejected_input_does_not_mutate() {
        let (_temp_dir, mut ledger, settings) = setup();

        let result = handle_transaction_command(
            &mut ledger,
            &settings,
            TransactionCommands::Add {
                category: "Rent".into(),
                amount: "a lot".into(),
                description: String::new(),
            },
        );

        assert!(result.unwrap_err().is_validation());
        assert!(ledger.is_empty());
        assert!(!settings.store_file.exists());
    }
}
