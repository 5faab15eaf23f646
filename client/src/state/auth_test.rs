use super::*;
use crate::net::types::Role;

fn ana() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "Ana".to_owned(),
        role: Role::Surrogate,
        is_authenticated: true,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_initializing() {
    let state = AuthState::default();
    assert_eq!(state, AuthState::Initializing);
    assert!(state.is_loading());
    assert!(state.user().is_none());
}

#[test]
fn authenticated_exposes_user() {
    let state = AuthState::Authenticated(ana());
    assert!(!state.is_loading());
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Ana"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn restore_with_user_authenticates() {
    let next = AuthState::Initializing.apply(AuthEvent::Restored(Some(ana()))).unwrap();
    assert_eq!(next, AuthState::Authenticated(ana()));
}

#[test]
fn restore_without_user_is_anonymous() {
    let next = AuthState::Initializing.apply(AuthEvent::Restored(None)).unwrap();
    assert_eq!(next, AuthState::Anonymous);
}

#[test]
fn restore_twice_is_illegal() {
    let err = AuthState::Anonymous.apply(AuthEvent::Restored(Some(ana()))).unwrap_err();
    assert_eq!(err, IllegalTransition { state: "anonymous", event: "restored" });
}

#[test]
fn sign_in_while_initializing_is_illegal() {
    let err = AuthState::Initializing.apply(AuthEvent::SignedIn(ana())).unwrap_err();
    assert_eq!(err.state, "initializing");
    assert_eq!(err.to_string(), "signed_in is not valid while initializing");
}

#[test]
fn sign_in_from_anonymous_authenticates() {
    let next = AuthState::Anonymous.apply(AuthEvent::SignedIn(ana())).unwrap();
    assert!(next.is_authenticated());
}

#[test]
fn sign_in_while_authenticated_replaces_user() {
    let mut other = ana();
    other.id = "u2".to_owned();
    other.name = "Bea".to_owned();
    let next = AuthState::Authenticated(ana()).apply(AuthEvent::SignedIn(other.clone())).unwrap();
    assert_eq!(next.user(), Some(&other));
}

#[test]
fn sign_out_from_any_state_is_anonymous() {
    for state in [AuthState::Initializing, AuthState::Anonymous, AuthState::Authenticated(ana())] {
        assert_eq!(state.apply(AuthEvent::SignedOut).unwrap(), AuthState::Anonymous);
    }
}

// =============================================================
// AuthError
// =============================================================

#[test]
fn only_storage_errors_clear_session() {
    assert!(AuthError::Storage(StorageError::Unavailable).clears_session());
    assert!(!AuthError::Rejected("invalid credentials".to_owned()).clears_session());
    assert!(!AuthError::Unavailable("offline".to_owned()).clears_session());
    assert!(!AuthError::NotReady.clears_session());
}
