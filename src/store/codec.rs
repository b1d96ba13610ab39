//! JSON encoding of stored record lists.

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Stored content that is not a well-formed list of the expected record shape.
#[derive(Debug, Error)]
#[error("malformed data under '{key}': {source}")]
pub struct DecodeError {
    pub key: &'static str,
    #[source]
    pub source: serde_json::Error,
}

pub fn decode_list<T: DeserializeOwned>(key: &'static str, raw: &str) -> Result<Vec<T>, DecodeError> {
    serde_json::from_str::<Vec<T>>(raw).map_err(|source| DecodeError { key, source })
}

pub fn encode_list<T: Serialize>(list: &[T]) -> AppResult<String> {
    Ok(serde_json::to_string(list)?)
}
