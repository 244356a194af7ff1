//! Persistent Key-Value Storage
//!
//! Thin seam over the browser's localStorage so stores can be exercised
//! natively with an in-memory backend.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("stored value is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::SerdeError(e) => StoreError::Malformed(e),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// JSON-encoded values addressed by string keys
pub trait StorageBackend {
    /// `Ok(None)` when the key has never been written
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;
}

/// `window.localStorage`, scoped to the browser profile
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some()
    }
}

impl StorageBackend for BrowserStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        if !Self::available() {
            return Err(StoreError::Unavailable);
        }
        match LocalStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        if !Self::available() {
            return Err(StoreError::Unavailable);
        }
        LocalStorage::set(key, value).map_err(StoreError::from)
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Raw-string backend; clones share the same map
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
        unavailable: bool,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Backend that fails every call, like a disabled localStorage
        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        pub fn put_raw(&self, key: &str, raw: &str) {
            self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl StorageBackend for MemoryStorage {
        fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
            if self.unavailable {
                return Err(StoreError::Unavailable);
            }
            match self.entries.borrow().get(key) {
                Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
                None => Ok(None),
            }
        }

        fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
            if self.unavailable {
                return Err(StoreError::Unavailable);
            }
            let raw = serde_json::to_string(value)?;
            self.entries.borrow_mut().insert(key.to_string(), raw);
            Ok(())
        }
    }
}
