use super::*;
use crate::util::storage::StorageError;

#[test]
fn rejection_shows_server_reason() {
    let err = AuthError::Rejected("invalid email or password".to_owned());
    assert_eq!(auth_error_message(&err), "invalid email or password");
}

#[test]
fn unavailable_hides_transport_detail() {
    let err = AuthError::Unavailable("auth request failed: 502".to_owned());
    let message = auth_error_message(&err);
    assert!(!message.contains("502"));
    assert!(message.contains("unavailable"));
}

#[test]
fn storage_failure_mentions_device() {
    let err = AuthError::Storage(StorageError::Unavailable);
    assert!(auth_error_message(&err).contains("device"));
}

#[test]
fn not_ready_asks_to_retry() {
    assert!(auth_error_message(&AuthError::NotReady).contains("try again"));
}

#[test]
fn blank_fields_are_rejected_before_submitting() {
    let err = Credentials::new("  ", "secret").unwrap_err();
    assert_eq!(err.to_string(), "email is required");
}
