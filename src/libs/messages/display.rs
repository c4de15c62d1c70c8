//! Display implementation for taxilog application messages.
//!
//! All user-facing text lives here, in one `match`, so wording stays
//! consistent across commands and every message variant must be given text
//! explicitly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === RECORD MESSAGES ===
            Message::RecordAdded(date) => format!("Record for {} added", date),
            Message::RecordUpdated(date) => format!("Record for {} updated", date),
            Message::RecordMoved(from, to) => format!("Record moved from {} to {}", from, to),
            Message::RecordNotFound(date) => format!("No record found for {}", date),
            Message::RecordRejected(reason) => format!("Record not saved: {}", reason),
            Message::RecordSaveFailed => "Failed to save the record".to_string(),
            Message::NoRecordsYet => "No records yet. Add a day with `taxilog add` to see the dashboard.".to_string(),
            Message::RecordsHeader => "Daily records".to_string(),
            Message::RecordsCount(count) => format!("{} record(s)", count),
            Message::WorkHoursComputed(hours) => format!("Worked time: {}", hours),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader => "Dashboard".to_string(),
            Message::OverallSummaryHeader => "Overall summary (all time)".to_string(),
            Message::PeriodHeader(period) => format!("{} overview", period),
            Message::IncomeCostHeader(period) => format!("{} income and costs", period),

            // === IMPORT MESSAGES ===
            Message::ImportReading(path) => format!("Reading records from {}", path),
            Message::ImportSkippedDuplicateDate(date) => {
                format!("Skipped imported record for {}: another record already holds that date", date)
            }
            Message::ImportSkippedInvalid(date, reason) => format!("Skipped imported record for {}: {}", date, reason),
            Message::ImportCompleted { imported, skipped } => {
                format!("Import finished: {} record(s) saved, {} skipped", imported, skipped)
            }
            Message::ImportParseFailed(error) => format!("Failed to parse the import file: {}", error),
            Message::ConfirmImport(count) => format!("Import {} record(s) into the ledger?", count),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported to {}", path),
            Message::ExportEmpty => "There are no records to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigNotFound(path) => format!("No configuration at {}, using defaults", path),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageLoaded(count) => format!("Loaded {} record(s) from storage", count),
            Message::StorageSaved(count) => format!("Saved {} record(s) to storage", count),
            Message::StorageCorrupted(error) => format!("Stored records could not be read: {}", error),

            // === PROMPTS ===
            Message::PromptCurrency => "Currency symbol".to_string(),
            Message::PromptDefaultPeriod => "Default dashboard period".to_string(),
            Message::PromptDateFormat => "Date display format (chrono syntax)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDate(value) => format!("'{}' is not a valid date, expected YYYY-MM-DD or 'today'", value),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
