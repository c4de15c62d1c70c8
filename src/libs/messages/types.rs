#[derive(Debug, Clone)]
pub enum Message {
    // === RECORD MESSAGES ===
    RecordAdded(String),   // date
    RecordUpdated(String), // date
    RecordMoved(String, String), // old date, new date
    RecordNotFound(String),      // date
    RecordRejected(String),      // reason
    RecordSaveFailed,
    NoRecordsYet,
    RecordsHeader,
    RecordsCount(usize),
    WorkHoursComputed(String), // formatted hours

    // === DASHBOARD MESSAGES ===
    DashboardHeader,
    OverallSummaryHeader,
    PeriodHeader(String),         // period type label
    IncomeCostHeader(String),     // period type label

    // === IMPORT MESSAGES ===
    ImportReading(String),                // path
    ImportSkippedDuplicateDate(String),   // date
    ImportSkippedInvalid(String, String), // date, reason
    ImportCompleted { imported: usize, skipped: usize },
    ImportParseFailed(String),            // error
    ConfirmImport(usize),                 // count

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigNotFound(String), // path
    ConfigSaveError,

    // === STORAGE MESSAGES ===
    StorageLoaded(usize), // record count
    StorageSaved(usize),  // record count
    StorageCorrupted(String),

    // === PROMPTS ===
    PromptCurrency,
    PromptDefaultPeriod,
    PromptDateFormat,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    InvalidDate(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
