//! In-memory key-value storage, used by tests and when embedding the stores.

use crate::errors::AppResult;
use crate::storage::KvStorage;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    log: RefCell<Vec<LogLine>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic lines written so far, oldest first.
    pub fn log_lines(&self) -> Vec<LogLine> {
        self.log.borrow().clone()
    }
}

impl KvStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self.items.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log.borrow_mut().push(LogLine {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
