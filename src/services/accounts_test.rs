use super::*;
use site_client::net::types::Role;

fn ana() -> SignupData {
    SignupData::new("Ana", "Ana@Example.com", "secret", Role::IntendedParent).unwrap()
}

#[test]
fn bytes_to_hex_pads_each_byte() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xab]), "000fab");
}

#[test]
fn tokens_are_64_hex_chars_and_unique() {
    let a = generate_token();
    let b = generate_token();
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
}

#[test]
fn register_issues_authenticated_session() {
    let mut dir = AccountDirectory::default();
    let record = dir.register(&ana()).unwrap();
    assert_eq!(record.user.name, "Ana");
    assert_eq!(record.user.email, "Ana@Example.com");
    assert_eq!(record.user.role, Role::IntendedParent);
    assert!(record.user.is_authenticated);
    assert!(Uuid::parse_str(&record.user.id).is_ok());
    assert_eq!(dir.len(), 1);
}

#[test]
fn register_rejects_duplicate_email_case_insensitively() {
    let mut dir = AccountDirectory::default();
    dir.register(&ana()).unwrap();
    let again = SignupData::new("Other", "ana@example.com", "pw", Role::Surrogate).unwrap();
    assert_eq!(dir.register(&again).unwrap_err(), AccountError::EmailTaken);
    assert_eq!(dir.len(), 1);
}

#[test]
fn sign_in_returns_registered_user_with_new_token() {
    let mut dir = AccountDirectory::default();
    let first = dir.register(&ana()).unwrap();
    let creds = Credentials::new("ANA@example.com", "anything").unwrap();
    let second = dir.sign_in(&creds).unwrap();
    assert_eq!(second.user, first.user);
    assert_ne!(second.token, first.token);
}

#[test]
fn sign_in_unknown_email_is_rejected() {
    let dir = AccountDirectory::default();
    assert!(dir.is_empty());
    let creds = Credentials::new("nobody@example.com", "pw").unwrap();
    assert_eq!(dir.sign_in(&creds).unwrap_err(), AccountError::InvalidCredentials);
}
