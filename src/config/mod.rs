//! Configuration module for the household budget
//!
//! Settings come from an optional JSON file; command-line flags override
//! individual values.

pub mod settings;

pub use settings::Settings;
