//! Session cache for catalog responses.
//!
//! Holds the game catalog and provider list (`config::cache::GAMES_KEY`,
//! `config::cache::PROVIDERS_KEY`) in sessionStorage, so switching pages
//! does not refetch them while a new tab always does. Entries are keyed by
//! app version; a deploy never reads a payload shaped for an older build.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::{dom, log};
use crate::config::APP_VERSION;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cache entry")]
    SerializationFailed,
    #[error("failed to write cache entry")]
    WriteFailed,
}

/// Storage key for a cache entry of the running build.
fn entry_key(key: &str) -> String {
    format!("{}@{}", key, APP_VERSION)
}

/// Read a cached payload.
///
/// A missing entry is a miss. So is an entry that no longer deserializes;
/// it is removed and logged.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let entry = entry_key(key);
    let json = storage.get_item(&entry).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn(&format!("dropping unreadable cache entry {}: {}", entry, e));
            let _ = storage.remove_item(&entry);
            None
        }
    }
}

/// Store a payload for the rest of the session.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(&entry_key(key), &json)
        .map_err(|_| CacheError::WriteFailed)
}
