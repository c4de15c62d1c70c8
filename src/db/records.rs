use crate::db::db::Db;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::record::DailyRecord;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Storage key of the serialized record list.
pub const RECORDS_KEY: &str = "taxiLogData";

const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// The persisted record collection.
///
/// All records live in one JSON array under [`RECORDS_KEY`]. The whole list
/// is loaded at once and rewritten on every change.
pub struct Records {
    conn: Connection,
}

impl Records {
    pub fn new() -> Result<Self> {
        Self::open(&DataStorage::new())
    }

    pub fn open(storage: &DataStorage) -> Result<Self> {
        let db = Db::open(storage)?;
        Ok(Records { conn: db.conn })
    }

    /// Current snapshot of all records, empty when nothing was saved yet.
    ///
    /// A stored value that cannot be parsed is an error; it is never
    /// replaced by an empty list.
    pub fn load(&self) -> Result<Vec<DailyRecord>> {
        let value: Option<String> = self.conn.query_row(SELECT_VALUE, params![RECORDS_KEY], |row| row.get(0)).optional()?;

        let records = match value {
            Some(json) => serde_json::from_str::<Vec<DailyRecord>>(&json).map_err(|e| msg_error_anyhow!(Message::StorageCorrupted(e.to_string())))?,
            None => Vec::new(),
        };
        msg_debug!(Message::StorageLoaded(records.len()));
        Ok(records)
    }

    /// Replaces the stored collection with `records`.
    pub fn save(&mut self, records: &[DailyRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.conn.execute(UPSERT_VALUE, params![RECORDS_KEY, json])?;
        msg_debug!(Message::StorageSaved(records.len()));
        Ok(())
    }
}
