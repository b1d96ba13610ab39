//! Unified application error type.
//! All modules (storage, store, forms, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid delivery type: {0} (use document, package or food)")]
    InvalidDeliveryType(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
