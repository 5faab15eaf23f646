//! Key-value storage backends for browser-persisted state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and the language preference both persist small string
//! entries. They talk to a `KeyValueStorage` so the browser `localStorage`
//! can be swapped for an in-memory map in tests.
//!
//! TRADE-OFFS
//! ==========
//! Browser access is hydrate-only. On the server every read misses and every
//! write fails with `StorageError::Unavailable`, which keeps server rendering
//! deterministic: nothing session-related is known until the client boots.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::collections::{HashMap, HashSet};
#[cfg(test)]
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure writing to a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize {key}: {reason}")]
    Serialize { key: String, reason: String },
}

/// Minimal string key-value store with `localStorage` semantics.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value at `key`, or `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend is missing or rejects the write
    /// (quota exceeded, private browsing, etc.).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str);
}

/// `window.localStorage`, resolved on every call.
///
/// Holding no handle keeps the type `Send + Sync` so it can live inside
/// Leptos context.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    leptos::logging::warn!("failed to remove {key} from localStorage: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local map backend for tests. Clones share the same entries.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

#[cfg(test)]
#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    read_only: HashSet<String>,
}

#[cfg(test)]
impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later write to `key` fail, simulating a full or locked store.
    pub fn reject_writes_to(&self, key: &str) {
        self.lock().read_only.insert(key.to_owned());
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.read_only.contains(key) {
            return Err(StorageError::Write { key: key.to_owned(), reason: "rejected".to_owned() });
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().entries.remove(key);
    }
}

/// Load a JSON value stored at `key`. Missing or malformed entries read as `None`.
pub fn load_json<S: KeyValueStorage + ?Sized, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save `value` as JSON at `key`.
///
/// # Errors
///
/// Returns `StorageError::Serialize` if the value cannot be encoded, or the
/// backend's write error.
pub fn save_json<S: KeyValueStorage + ?Sized, T: Serialize>(storage: &S, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize { key: key.to_owned(), reason: e.to_string() })?;
    storage.set(key, &raw)
}
