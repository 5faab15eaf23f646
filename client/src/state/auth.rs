//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the header to coordinate login redirects and
//! identity-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthState::apply` is a pure transition function. Storage and credential
//! calls happen in `AuthController`, which reports what happened as an
//! `AuthEvent`; the reactive `AuthContext` applies that event to its signal.
//!
//! ```text
//! Initializing --Restored(Some)--> Authenticated
//! Initializing --Restored(None)--> Anonymous
//! Anonymous | Authenticated --SignedIn--> Authenticated
//! any --SignedOut--> Anonymous
//! ```

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::storage::StorageError;

/// Where the tab's session stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Persisted session not read yet.
    #[default]
    Initializing,
    /// No session.
    Anonymous,
    /// Signed in as this user.
    Authenticated(User),
}

/// Something that happened to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Boot-time read of the session store finished.
    Restored(Option<User>),
    /// Login or signup succeeded and the session was persisted.
    SignedIn(User),
    /// Session cleared.
    SignedOut,
}

impl AuthEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Restored(_) => "restored",
            Self::SignedIn(_) => "signed_in",
            Self::SignedOut => "signed_out",
        }
    }
}

/// An event that is not valid in the current state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{event} is not valid while {state}")]
pub struct IllegalTransition {
    pub state: &'static str,
    pub event: &'static str,
}

/// Why a login or signup did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The credential service refused (bad credentials, email taken, ...).
    #[error("{0}")]
    Rejected(String),
    /// The credential service could not be reached.
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
    /// The session could not be persisted; the store has been emptied.
    #[error("could not save session: {0}")]
    Storage(#[from] StorageError),
    /// The persisted session has not been read yet.
    #[error("session is still loading")]
    NotReady,
}

impl AuthError {
    /// Whether the failure left the session store empty.
    #[must_use]
    pub fn clears_session(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl AuthState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True until the persisted session has been read.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Anonymous => "anonymous",
            Self::Authenticated(_) => "authenticated",
        }
    }

    /// Compute the state after `event`.
    ///
    /// # Errors
    ///
    /// Returns `IllegalTransition` for `Restored` outside `Initializing` and
    /// for `SignedIn` while still `Initializing`.
    ///
    /// `SignedOut` is accepted from every state, including `Initializing`,
    /// so a logout or a cross-tab sign-out arriving before the restore
    /// finishes still leaves the tab `Anonymous` with empty storage.
    pub fn apply(&self, event: AuthEvent) -> Result<AuthState, IllegalTransition> {
        match (self, event) {
            (Self::Initializing, AuthEvent::Restored(Some(user))) => Ok(Self::Authenticated(user)),
            (Self::Initializing, AuthEvent::Restored(None)) => Ok(Self::Anonymous),
            (Self::Anonymous | Self::Authenticated(_), AuthEvent::SignedIn(user)) => Ok(Self::Authenticated(user)),
            (_, AuthEvent::SignedOut) => Ok(Self::Anonymous),
            (state, event) => Err(IllegalTransition { state: state.name(), event: event.name() }),
        }
    }
}
