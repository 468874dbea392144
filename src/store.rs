//! Persisted key-value storage.
//!
//! The browser's `localStorage` is reached through [`KeyValueStore`] so the
//! core can run against [`MemoryStore`] in tests. Values are JSON-encoded,
//! and reads degrade to a caller-supplied fallback instead of failing.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`KeyValueStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is reachable (private mode, sandboxed frame).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security error).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The value could not be encoded as JSON.
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value storage capability.
///
/// Methods take `&self` because the browser storage object is shared and
/// internally mutable.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Load and decode the JSON value stored under `key`.
///
/// Missing keys, backend errors, and malformed JSON all yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("store read failed for {key}: {err}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("ignoring malformed stored value for {key}: {err}");
            None
        }
    }
}

/// Load the value under `key`, or `fallback` when it is absent or unreadable.
pub fn load_or<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, fallback: T) -> T {
    load_json(store, key).unwrap_or(fallback)
}

/// JSON-encode `value` and write it under `key`.
///
/// # Errors
///
/// Returns an error when encoding fails or the backend rejects the write.
pub fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// In-memory [`KeyValueStore`], used as the test double and as the fallback
/// when the browser exposes no storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising swallowed errors.
    #[must_use]
    pub fn failing() -> Self {
        Self { items: RefCell::default(), reject_writes: true }
    }

    /// Seed a raw (already encoded) value.
    #[must_use]
    pub fn with_raw(self, key: &str, raw: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), raw.to_owned());
        self
    }

    /// Raw string currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::Backend("quota exceeded".to_owned()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
