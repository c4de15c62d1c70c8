//! # TaxiLog - Daily taxi business ledger
//!
//! A command-line ledger for individual taxi operators. Each working day is
//! logged once with its revenue, distance, fuel, expenses, shifts and rides;
//! the dashboard turns the records into daily, weekly and monthly figures.
//!
//! ## Features
//!
//! - **Daily Records**: Strict shift validation and derived work hours and net earnings
//! - **Period Aggregation**: Daily, ISO-weekly and monthly totals with safe averages
//! - **Overall Summary**: All-time totals and efficiency ratios
//! - **Data Export**: Aggregated series as CSV or JSON
//! - **Import**: Merge JSON backups of the browser ledger
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taxilog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
