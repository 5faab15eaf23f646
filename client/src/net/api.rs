//! Credential service client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api/auth` endpoints.
//! Server-side (SSR): every call fails with `AuthError::Unavailable`, since
//! logging in only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! 4xx responses are the service refusing the request (bad credentials,
//! duplicate email) and map to `AuthError::Rejected`. Transport failures and
//! 5xx responses map to `AuthError::Unavailable`. Neither is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{Credentials, SessionRecord, SignupData};
use crate::state::auth::AuthError;

/// Default mount point of the credential endpoints.
pub const DEFAULT_AUTH_BASE: &str = "/api/auth";

/// External collaborator that turns credentials into a session.
///
/// Implementations decide what "valid" means; callers only see a session
/// record or an `AuthError`.
pub trait CredentialService: Send + Sync {
    /// Exchange email + password for a session.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<SessionRecord, AuthError>>;

    /// Register a new account and open a session for it.
    fn signup(&self, data: &SignupData) -> impl Future<Output = Result<SessionRecord, AuthError>>;
}

/// HTTP implementation talking to the site's own server.
#[derive(Clone, Debug)]
pub struct HttpCredentialService {
    base: String,
}

impl Default for HttpCredentialService {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_BASE)
    }
}

impl HttpCredentialService {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_owned() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("auth request failed: {status}")
}

/// Map a non-OK response to an `AuthError`.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, reason: Option<String>) -> AuthError {
    let reason = reason.unwrap_or_else(|| request_failed_message(status));
    if (400..500).contains(&status) {
        AuthError::Rejected(reason)
    } else {
        AuthError::Unavailable(reason)
    }
}

#[cfg(feature = "hydrate")]
async fn post_for_session<T: serde::Serialize>(url: &str, body: &T) -> Result<SessionRecord, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Unavailable(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Unavailable(e.to_string()))?;
    if resp.ok() {
        return resp
            .json::<SessionRecord>()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()));
    }
    let status = resp.status();
    let reason = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    Err(classify_failure(status, reason))
}

impl CredentialService for HttpCredentialService {
    async fn login(&self, credentials: &Credentials) -> Result<SessionRecord, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_for_session(&login_endpoint(&self.base), credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable(format!("{} is not reachable from the server", self.base)))
        }
    }

    async fn signup(&self, data: &SignupData) -> Result<SessionRecord, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_for_session(&signup_endpoint(&self.base), data).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = data;
            Err(AuthError::Unavailable(format!("{} is not reachable from the server", self.base)))
        }
    }
}
