use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use household_budget::cli::{
    handle_report_command, handle_transaction_command, ReportCommands, TransactionCommands,
};
use household_budget::config::Settings;
use household_budget::{init_tracing, Ledger, LoadStatus};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Household budget tracker",
    long_about = "Records income and expense transactions in a plain text file \
                  and reports balances, expenses by category, and monthly or \
                  yearly summaries."
)]
struct Cli {
    /// Transaction store file
    #[arg(short, long, global = true, env = "BUDGET_FILE")]
    file: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and store path
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.or_else(Settings::default_config_file);
    let mut settings = match &config_path {
        Some(path) => Settings::load_or_default(path)?,
        None => Settings::default(),
    };
    if let Some(file) = cli.file {
        settings.store_file = file;
    }

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            let mut ledger = open_ledger(&settings);
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let ledger = open_ledger(&settings);
            handle_report_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                match &config_path {
                    Some(path) => {
                        settings.save(path)?;
                        println!("Settings written to {}", path.display());
                    }
                    None => anyhow::bail!("No settings location available; pass --config"),
                }
            }
            println!("Household Budget Configuration");
            println!("==============================");
            match &config_path {
                Some(path) => println!("Settings file:   {}", path.display()),
                None => println!("Settings file:   (none)"),
            }
            println!("Store file:      {}", settings.store_file.display());
            println!("Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Household Budget - income and expense tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}

fn open_ledger(settings: &Settings) -> Ledger {
    let ledger = Ledger::open_file(&settings.store_file);
    match ledger.load_status() {
        LoadStatus::Fresh => eprintln!(
            "File {} not found. Starting with a new budget.",
            settings.store_file.display()
        ),
        LoadStatus::Failed(e) => eprintln!("Error loading from file: {}", e),
        LoadStatus::Loaded => {}
    }
    ledger
}
