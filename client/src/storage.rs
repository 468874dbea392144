//! `window.localStorage` behind the core's [`KeyValueStore`] capability.

use shopfront::store::{KeyValueStore, StoreError};
use wasm_bindgen::JsValue;

/// Local storage handle. A detached handle (no storage reachable) fails
/// every call with [`StoreError::Unavailable`], which the core absorbs.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Open the origin's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when there is no window or the
    /// browser refuses access (private mode, sandboxed frame).
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage: Some(storage) }),
            Ok(None) => Err(StoreError::Unavailable),
            Err(err) => Err(backend_error(err)),
        }
    }

    pub fn detached() -> Self {
        Self { storage: None }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

fn backend_error(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(backend_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(backend_error)
    }
}
