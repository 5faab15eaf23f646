use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::session::{TOKEN_KEY, USER_KEY};
use crate::util::storage::MemoryStorage;

fn ana() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "Ana".to_owned(),
        role: Role::Surrogate,
        is_authenticated: true,
    }
}

fn record() -> SessionRecord {
    SessionRecord { token: "tok-123".to_owned(), user: ana() }
}

/// Credential service returning a fixed outcome and counting calls.
struct StubCredentials {
    outcome: Result<SessionRecord, AuthError>,
    calls: AtomicUsize,
}

impl StubCredentials {
    fn accepting(record: SessionRecord) -> Self {
        Self { outcome: Ok(record), calls: AtomicUsize::new(0) }
    }

    fn rejecting(reason: &str) -> Self {
        Self { outcome: Err(AuthError::Rejected(reason.to_owned())), calls: AtomicUsize::new(0) }
    }
}

impl CredentialService for StubCredentials {
    async fn login(&self, _credentials: &Credentials) -> Result<SessionRecord, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    async fn signup(&self, _data: &SignupData) -> Result<SessionRecord, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

fn controller(storage: &MemoryStorage, stub: StubCredentials) -> AuthController<MemoryStorage, StubCredentials> {
    AuthController::new(SessionStore::new(storage.clone()), stub)
}

fn creds() -> Credentials {
    Credentials::new("a@b.com", "secret").unwrap()
}

/// Session present in memory iff a valid record is in storage.
fn assert_consistent(state: &AuthState, store: &SessionStore<MemoryStorage>) {
    assert_eq!(state.user().cloned(), store.load().map(|r| r.user));
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_persisted_session_authenticates() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::rejecting("unused"));
    ctl.store().save(&record()).unwrap();

    let state = AuthState::Initializing.apply(ctl.restore()).unwrap();
    assert_eq!(state, AuthState::Authenticated(ana()));
    assert_consistent(&state, ctl.store());
}

#[test]
fn restore_on_empty_storage_is_anonymous() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::rejecting("unused"));
    let state = AuthState::Initializing.apply(ctl.restore()).unwrap();
    assert_eq!(state, AuthState::Anonymous);
}

#[test]
fn restore_with_corrupt_user_clears_storage() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok-123").unwrap();
    storage.set(USER_KEY, "not json").unwrap();
    let ctl = controller(&storage, StubCredentials::rejecting("unused"));

    let state = AuthState::Initializing.apply(ctl.restore()).unwrap();
    assert_eq!(state, AuthState::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn restore_with_unauthenticated_user_clears_storage() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::rejecting("unused"));
    let mut stale = record();
    stale.user.is_authenticated = false;
    ctl.store().save(&stale).unwrap();

    assert_eq!(ctl.restore(), AuthEvent::Restored(None));
    assert!(storage.is_empty());
}

// =============================================================
// login / signup
// =============================================================

#[test]
fn login_accepted_persists_and_authenticates() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::accepting(record()));
    let state = AuthState::Initializing.apply(ctl.restore()).unwrap();

    let event = block_on(ctl.login(&creds())).unwrap();
    let state = state.apply(event).unwrap();

    assert_eq!(state, AuthState::Authenticated(ana()));
    assert_eq!(ctl.store().load(), Some(record()));
    assert_consistent(&state, ctl.store());
}

#[test]
fn login_rejected_leaves_everything_untouched() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::rejecting("invalid credentials"));
    let state = AuthState::Initializing.apply(ctl.restore()).unwrap();

    let err = block_on(ctl.login(&creds())).unwrap_err();
    assert_eq!(err, AuthError::Rejected("invalid credentials".to_owned()));
    assert_eq!(state, AuthState::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn login_marks_issued_user_authenticated() {
    let storage = MemoryStorage::new();
    let mut issued = record();
    issued.user.is_authenticated = false;
    let ctl = controller(&storage, StubCredentials::accepting(issued));

    let event = block_on(ctl.login(&creds())).unwrap();
    assert_eq!(event, AuthEvent::SignedIn(ana()));
    assert!(ctl.store().load().is_some_and(|r| r.user.is_authenticated));
}

#[test]
fn login_with_failing_storage_reports_and_empties_store() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::accepting(record()));
    storage.reject_writes_to(USER_KEY);

    let err = block_on(ctl.login(&creds())).unwrap_err();
    assert!(err.clears_session());
    assert!(storage.is_empty());

    let state = AuthState::Anonymous.apply(AuthEvent::SignedOut).unwrap();
    assert_consistent(&state, ctl.store());
}

#[test]
fn signup_accepted_behaves_like_login() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::accepting(record()));
    let data = SignupData::new("Ana", "a@b.com", "secret", Role::Surrogate).unwrap();

    let event = block_on(ctl.signup(&data)).unwrap();
    let state = AuthState::Anonymous.apply(event).unwrap();
    assert!(state.is_authenticated());
    assert_consistent(&state, ctl.store());
}

#[test]
fn signup_rejected_does_not_persist() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::rejecting("email already registered"));
    let data = SignupData::new("Ana", "a@b.com", "secret", Role::IntendedParent).unwrap();

    assert!(block_on(ctl.signup(&data)).is_err());
    assert!(storage.is_empty());
    assert_eq!(ctl.credentials.calls.load(Ordering::SeqCst), 1);
}

// =============================================================
// logout / resync
// =============================================================

#[test]
fn logout_clears_storage_and_signs_out() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::accepting(record()));
    let state = AuthState::Anonymous.apply(block_on(ctl.login(&creds())).unwrap()).unwrap();

    let state = state.apply(ctl.logout()).unwrap();
    assert_eq!(state, AuthState::Anonymous);
    assert!(storage.is_empty());
    assert_consistent(&state, ctl.store());
}

#[test]
fn logout_twice_is_harmless() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::rejecting("unused"));
    assert_eq!(ctl.logout(), AuthEvent::SignedOut);
    assert_eq!(ctl.logout(), AuthEvent::SignedOut);
    assert!(storage.is_empty());
}

#[test]
fn resync_follows_storage() {
    let storage = MemoryStorage::new();
    let ctl = controller(&storage, StubCredentials::rejecting("unused"));
    assert_eq!(ctl.resync(), AuthEvent::SignedOut);

    ctl.store().save(&record()).unwrap();
    assert_eq!(ctl.resync(), AuthEvent::SignedIn(ana()));

    storage.remove(TOKEN_KEY);
    assert_eq!(ctl.resync(), AuthEvent::SignedOut);
}
