//! Persistence layer for the taxilog application.
//!
//! The record collection is stored as one serialized value in a small SQLite
//! key-value table. The schema is versioned through the migration manager,
//! which runs whenever a connection is opened.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taxilog::db::records::Records;
//!
//! let records = Records::new()?.load()?;
//! println!("{} records stored", records.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and database file location.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Load and save of the serialized record collection.
pub mod records;
