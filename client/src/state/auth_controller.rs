//! Effectful side of the auth state machine.
//!
//! ARCHITECTURE
//! ============
//! Each operation performs its storage and credential-service effects, then
//! reports the outcome as an `AuthEvent`. Applying the event to `AuthState`
//! is left to the caller, so the controller never holds the live state and
//! a suspended login cannot flip the UI early.
//!
//! Persistence always happens before the `SignedIn` event is returned, and
//! logout clears storage before returning `SignedOut`: by the time an event
//! is applied, storage already agrees with it.

#[cfg(test)]
#[path = "auth_controller_test.rs"]
mod auth_controller_test;

use super::auth::{AuthError, AuthEvent};
use super::session::SessionStore;
use crate::net::api::CredentialService;
use crate::net::types::{Credentials, SessionRecord, SignupData, User};
use crate::util::storage::KeyValueStorage;

/// Session store + credential service.
pub struct AuthController<S, C> {
    store: SessionStore<S>,
    credentials: C,
}

impl<S: KeyValueStorage, C: CredentialService> AuthController<S, C> {
    pub fn new(store: SessionStore<S>, credentials: C) -> Self {
        Self { store, credentials }
    }

    #[cfg(test)]
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Read the persisted session at boot.
    ///
    /// Leftovers that do not form a usable session (unreadable user, token
    /// without user, user not marked authenticated) are cleared.
    pub fn restore(&self) -> AuthEvent {
        AuthEvent::Restored(self.read_session())
    }

    /// Re-read storage after another tab changed it.
    pub fn resync(&self) -> AuthEvent {
        match self.read_session() {
            Some(user) => AuthEvent::SignedIn(user),
            None => AuthEvent::SignedOut,
        }
    }

    /// Verify credentials and persist the resulting session.
    ///
    /// # Errors
    ///
    /// `Rejected`/`Unavailable` from the credential service (storage is
    /// untouched), or `Storage` if persisting failed (storage is now empty).
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthEvent, AuthError> {
        let record = self.credentials.login(credentials).await?;
        self.persist(record)
    }

    /// Register an account and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Same as [`AuthController::login`].
    pub async fn signup(&self, data: &SignupData) -> Result<AuthEvent, AuthError> {
        let record = self.credentials.signup(data).await?;
        self.persist(record)
    }

    /// Clear the session. Never fails.
    pub fn logout(&self) -> AuthEvent {
        self.store.clear();
        AuthEvent::SignedOut
    }

    fn persist(&self, mut record: SessionRecord) -> Result<AuthEvent, AuthError> {
        record.user.is_authenticated = true;
        self.store.save(&record)?;
        Ok(AuthEvent::SignedIn(record.user))
    }

    fn read_session(&self) -> Option<User> {
        match self.store.load() {
            Some(record) if record.user.is_authenticated => Some(record.user),
            Some(_) => {
                leptos::logging::warn!("stored user is not authenticated; clearing session");
                self.store.clear();
                None
            }
            None => {
                if self.store.has_entries() {
                    self.store.clear();
                }
                None
            }
        }
    }
}
