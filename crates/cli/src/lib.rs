//! Demonstration harness for the inventory rules.
//!
//! Builds an inventory from configuration, then prints its state for day 0 and
//! for each simulated day after that.

pub mod config;
pub mod report;

pub use config::{DemoConfig, OutputFormat};
pub use report::{DayReport, run};
