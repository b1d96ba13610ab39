//! Local key-value storage.
//!
//! Every record store persists its whole list as one serialized string under
//! a fixed key, the same way a browser's local storage is used. The backend is
//! injected into the stores through the [`KvStorage`] trait.

pub mod log;
pub mod memory;
pub mod migrate;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::errors::AppResult;

pub trait KvStorage {
    /// Read the raw value stored under `key`, `None` when the key is absent.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Write `value` under `key`, unconditionally overwriting prior content.
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn keys(&self) -> AppResult<Vec<String>>;

    /// Write a diagnostic line into the backend's internal log, if it keeps one.
    fn log(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}
