//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is the one handle components use to read and change the
//! session. It is built once in `App`, provided through Leptos context, and
//! wraps an `AuthController` around a reactive `AuthState` signal. Route
//! guards use the redirect helpers here so every guarded view applies the
//! same login redirect and return-to behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{CredentialService, HttpCredentialService};
use crate::net::types::{Credentials, SignupData};
use crate::state::auth::{AuthError, AuthEvent, AuthState};
use crate::state::auth_controller::AuthController;
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Route of the login page.
pub const LOGIN_PATH: &str = "/login";

/// A location the user tried to reach before being sent to log in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl NavigationRequest {
    /// `search` and `hash` are accepted with or without their leading
    /// `?` / `#`.
    pub fn new(path: impl Into<String>, search: impl Into<String>, hash: impl Into<String>) -> Self {
        Self { path: path.into(), search: with_prefix('?', search.into()), hash: with_prefix('#', hash.into()) }
    }

    /// Full local href for navigation.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{}{}{}", self.path, self.search, self.hash)
    }
}

fn with_prefix(prefix: char, value: String) -> String {
    if value.is_empty() || value.starts_with(prefix) { value } else { format!("{prefix}{value}") }
}

/// Where to go after a successful login or signup.
///
/// Only same-site paths are honored; anything else (absent, relative,
/// protocol-relative, the login page itself) lands on `/`.
#[must_use]
pub fn post_login_destination(request: Option<&NavigationRequest>) -> String {
    let Some(request) = request else {
        return "/".to_owned();
    };
    let path = request.path.as_str();
    let local = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    if !local || path == LOGIN_PATH || path == "/signup" {
        return "/".to_owned();
    }
    request.href()
}

/// What a guarded route should show for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not restored yet: placeholder only, no redirect.
    Loading,
    /// Render the guarded view.
    Render,
    /// Send the user to log in.
    Redirect,
}

#[must_use]
pub fn gate_decision(state: &AuthState) -> GateDecision {
    match state {
        AuthState::Initializing => GateDecision::Loading,
        AuthState::Authenticated(user) if user.is_authenticated => GateDecision::Render,
        AuthState::Authenticated(_) | AuthState::Anonymous => GateDecision::Redirect,
    }
}

/// Whether a guard should send the user to log in.
///
/// `previous` is the guard's last decision, `None` on first run. A guard
/// that was rendering when the user logged out stays put: the logout flow
/// navigates home itself, and capturing the page as a return target would
/// bring the user back to it on the next login.
#[must_use]
pub fn should_redirect(previous: Option<GateDecision>, current: GateDecision, user_logout: bool) -> bool {
    current == GateDecision::Redirect && !(previous == Some(GateDecision::Render) && user_logout)
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
///
/// Runs as an effect, so it re-fires if the session ends while the guarded
/// view is on screen (see [`should_redirect`]). The requested location is
/// stored in `AuthContext::return_to` before navigating.
pub fn install_unauth_redirect<S, C, F, R>(auth: AuthContext<S, C>, requested: R, navigate: F)
where
    S: KeyValueStorage + 'static,
    C: CredentialService + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    R: Fn() -> NavigationRequest + 'static,
{
    Effect::new(move |previous: Option<GateDecision>| {
        let current = gate_decision(&auth.state.get());
        if should_redirect(previous, current, auth.ended_by_logout()) {
            auth.return_to.set(Some(requested()));
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        current
    });
}

/// Process-wide session handle provided through Leptos context.
///
/// Generic over the storage backend and credential service so it can be
/// driven by in-memory collaborators; the site uses the defaults.
pub struct AuthContext<S = BrowserStorage, C = HttpCredentialService> {
    pub state: RwSignal<AuthState>,
    /// Pending post-login destination, captured by route guards.
    pub return_to: RwSignal<Option<NavigationRequest>>,
    /// Set when the last transition was the user's own logout.
    user_logout: RwSignal<bool>,
    controller: Arc<AuthController<S, C>>,
}

impl<S, C> Clone for AuthContext<S, C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            return_to: self.return_to,
            user_logout: self.user_logout,
            controller: Arc::clone(&self.controller),
        }
    }
}

impl AuthContext {
    /// Context backed by `localStorage` and the site's own auth endpoints.
    pub fn browser() -> Self {
        Self::new(AuthController::new(SessionStore::new(BrowserStorage), HttpCredentialService::default()))
    }
}

impl<S: KeyValueStorage, C: CredentialService> AuthContext<S, C> {
    pub fn new(controller: AuthController<S, C>) -> Self {
        Self {
            state: RwSignal::new(AuthState::Initializing),
            return_to: RwSignal::new(None),
            user_logout: RwSignal::new(false),
            controller: Arc::new(controller),
        }
    }

    fn apply(&self, event: AuthEvent, by_user: bool) {
        self.user_logout.set(by_user && event == AuthEvent::SignedOut);
        self.state.update(|state| match state.apply(event) {
            Ok(next) => *state = next,
            Err(e) => leptos::logging::warn!("ignored auth event: {e}"),
        });
    }

    /// Whether the session last ended through [`AuthContext::logout`].
    #[must_use]
    pub fn ended_by_logout(&self) -> bool {
        self.user_logout.get_untracked()
    }

    /// Read the persisted session. Only acts while `Initializing`.
    pub fn restore(&self) {
        if self.state.get_untracked().is_loading() {
            self.apply(self.controller.restore(), false);
        }
    }

    /// Re-read the persisted session after another tab changed it.
    pub fn resync(&self) {
        if !self.state.get_untracked().is_loading() {
            self.apply(self.controller.resync(), false);
        }
    }

    /// Log in. State is unchanged until the credential service answers.
    ///
    /// # Errors
    ///
    /// `NotReady` while initializing, otherwise whatever the controller
    /// reported.
    pub async fn login(&self, credentials: Credentials) -> Result<(), AuthError> {
        if self.state.get_untracked().is_loading() {
            return Err(AuthError::NotReady);
        }
        let outcome = self.controller.login(&credentials).await;
        self.settle(outcome)
    }

    /// Sign up. Same contract as [`AuthContext::login`].
    ///
    /// # Errors
    ///
    /// See [`AuthContext::login`].
    pub async fn signup(&self, data: SignupData) -> Result<(), AuthError> {
        if self.state.get_untracked().is_loading() {
            return Err(AuthError::NotReady);
        }
        let outcome = self.controller.signup(&data).await;
        self.settle(outcome)
    }

    /// End the session at the user's request.
    pub fn logout(&self) {
        self.return_to.set(None);
        self.apply(self.controller.logout(), true);
    }

    /// Consume the pending return target and resolve where to go next.
    pub fn take_destination(&self) -> String {
        let requested = self.return_to.try_update(Option::take).flatten();
        post_login_destination(requested.as_ref())
    }

    fn settle(&self, outcome: Result<AuthEvent, AuthError>) -> Result<(), AuthError> {
        match outcome {
            Ok(event) => {
                self.apply(event, false);
                Ok(())
            }
            Err(e) => {
                if e.clears_session() {
                    self.apply(AuthEvent::SignedOut, false);
                }
                Err(e)
            }
        }
    }
}

/// Follow session changes made in other tabs.
///
/// The browser fires `storage` only in tabs other than the writer, so this
/// never re-applies the tab's own writes.
pub fn install_storage_sync(auth: AuthContext) {
    #[cfg(feature = "hydrate")]
    {
        // Installed once from `App`; the listener lives as long as the page.
        let _listener = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            let relevant = ev.key().is_none_or(|key| SessionStore::<BrowserStorage>::owns_key(&key));
            if relevant {
                auth.resync();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
