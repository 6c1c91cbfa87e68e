//! Tracing setup for the binary

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `verbosity` picks the crate's level (0 = warn, 1 = info, 2+ = debug);
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("household_budget={}", level)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .try_init();
    });
}
