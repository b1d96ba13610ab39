//! SQLite-backed key-value storage (lightweight for CLI usage).

use crate::errors::AppResult;
use crate::storage::KvStorage;
use crate::storage::log::ttlog;
use crate::storage::migrate::run_pending_migrations;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStorage {
    pub conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl KvStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, now])?;
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key FROM kv_store ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
