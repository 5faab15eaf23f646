//! In-memory account directory backing the credential endpoints.
//!
//! TRADE-OFFS
//! ==========
//! Accounts are keyed by normalized email and kept only in process memory.
//! Passwords are accepted as given and never compared; signing in only
//! requires that the email was registered. Every sign-in issues a fresh
//! random token that nothing validates afterwards.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use std::collections::HashMap;
use std::fmt::Write;

use rand::Rng;
use site_client::net::types::{Credentials, SessionRecord, SignupData, User};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Lookup key for an email address.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registered users by normalized email.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    users: HashMap<String, User>,
}

impl AccountDirectory {
    /// Register a new account and open a session for it.
    ///
    /// # Errors
    ///
    /// `EmailTaken` if the normalized email is already registered.
    pub fn register(&mut self, data: &SignupData) -> Result<SessionRecord, AccountError> {
        let key = normalize_email(data.email());
        if self.users.contains_key(&key) {
            return Err(AccountError::EmailTaken);
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: data.email().trim().to_owned(),
            name: data.name().trim().to_owned(),
            role: data.role(),
            is_authenticated: true,
        };
        self.users.insert(key, user.clone());
        Ok(SessionRecord { token: generate_token(), user })
    }

    /// Open a session for a registered email.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` if no account uses the email.
    pub fn sign_in(&self, credentials: &Credentials) -> Result<SessionRecord, AccountError> {
        let user = self
            .users
            .get(&normalize_email(credentials.email()))
            .cloned()
            .ok_or(AccountError::InvalidCredentials)?;
        Ok(SessionRecord { token: generate_token(), user })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
