use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taxilog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the user data directory.
    pub fn new() -> Result<Db> {
        Self::open(&DataStorage::new())
    }

    /// Opens (creating if needed) the database inside `storage` and brings
    /// its schema up to date.
    pub fn open(storage: &DataStorage) -> Result<Db> {
        let db_file_path = storage.get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
