//! Persisted session record: token + serialized user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store owns the two storage entries that make up a session. The auth
//! controller is its only writer; everything else reads the in-memory
//! `AuthState` derived from it.
//!
//! TRADE-OFFS
//! ==========
//! The backend has no transactions. A save that fails half-way clears both
//! entries, so storage never holds a token without a user or the reverse;
//! the cost is that a failed re-login also drops the previous session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{SessionRecord, User};
use crate::util::storage::{KeyValueStorage, StorageError};

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user.
pub const USER_KEY: &str = "user";

/// Reads and writes the session entries on a storage backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether `key` is one of the entries this store owns.
    #[must_use]
    pub fn owns_key(key: &str) -> bool {
        key == TOKEN_KEY || key == USER_KEY
    }

    /// Persist `record`, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns the backend error if either write fails. Both entries are
    /// removed before returning the error.
    pub fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let user = serde_json::to_string(&record.user)
            .map_err(|e| StorageError::Serialize { key: USER_KEY.to_owned(), reason: e.to_string() })?;
        let written = self
            .storage
            .set(TOKEN_KEY, &record.token)
            .and_then(|()| self.storage.set(USER_KEY, &user));
        if written.is_err() {
            self.clear();
        }
        written
    }

    /// Read the session, if a complete and readable one is stored.
    ///
    /// A missing entry, an empty token, or a user entry that does not parse
    /// all read as `None`.
    pub fn load(&self) -> Option<SessionRecord> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(SessionRecord { token, user }),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored user: {e}");
                None
            }
        }
    }

    /// Whether either entry is present, readable or not.
    pub fn has_entries(&self) -> bool {
        self.storage.get(TOKEN_KEY).is_some() || self.storage.get(USER_KEY).is_some()
    }

    /// Remove both entries. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
