//! Core library modules for the taxilog application.
//!
//! ## Features
//!
//! - **Domain**: Daily records, shifts, time arithmetic, ledger operations
//! - **Analysis**: Period aggregation and the overall summary
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Console tables, data export, formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taxilog::db::records::Records;
//! use taxilog::libs::aggregate::{aggregate, PeriodType};
//!
//! let records = Records::new()?.load()?;
//! for period in aggregate(&records, PeriodType::Monthly) {
//!     println!("{}: {:.2}", period.period, period.net_earnings);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod ledger;
pub mod messages;
pub mod record;
pub mod shift;
pub mod summary;
pub mod time;
pub mod view;
