use super::*;

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
// Role
// =============================================================

#[test]
fn role_wire_names_are_snake_case() {
    assert_eq!(serde_json::to_value(Role::IntendedParent).unwrap(), "intended_parent");
    assert_eq!(serde_json::to_value(Role::Surrogate).unwrap(), "surrogate");
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
}

#[test]
fn role_from_str_rejects_unknown() {
    assert_eq!("surrogate".parse::<Role>(), Ok(Role::Surrogate));
    assert_eq!("egg_donor".parse::<Role>(), Err(FormError::UnknownRole("egg_donor".to_owned())));
}

#[test]
fn role_admin_is_not_self_service() {
    assert!(Role::IntendedParent.is_self_service());
    assert!(Role::Surrogate.is_self_service());
    assert!(!Role::Admin.is_self_service());
}

#[test]
fn role_rejects_unknown_variant_on_deserialize() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_serializes_camel_case() {
    let json = serde_json::to_value(ana()).unwrap();
    assert_eq!(json["isAuthenticated"], true);
    assert_eq!(json["role"], "surrogate");
    assert!(json.get("is_authenticated").is_none());
}

#[test]
fn user_missing_authenticated_flag_defaults_false() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.com","name":"Ana","role":"surrogate"}"#).unwrap();
    assert!(!user.is_authenticated);
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_trim_email_keep_password() {
    let creds = Credentials::new("  a@b.com ", " secret ").unwrap();
    assert_eq!(creds.email(), "a@b.com");
    assert_eq!(creds.password(), " secret ");
}

#[test]
fn credentials_reject_blank_fields() {
    assert_eq!(Credentials::new("", "secret"), Err(FormError::MissingField("email")));
    assert_eq!(Credentials::new("a@b.com", "   "), Err(FormError::MissingField("password")));
}

#[test]
fn credentials_validate_on_deserialize() {
    assert!(serde_json::from_str::<Credentials>(r#"{"email":"","password":"x"}"#).is_err());
    let creds: Credentials = serde_json::from_str(r#"{"email":"a@b.com","password":"x"}"#).unwrap();
    assert_eq!(creds.email(), "a@b.com");
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("a@b.com", "hunter2").unwrap();
    let debug = format!("{creds:?}");
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("a@b.com"));
}

// =============================================================
// SignupData
// =============================================================

#[test]
fn signup_accepts_self_service_roles() {
    let data = SignupData::new("Ana", "a@b.com", "secret", Role::IntendedParent).unwrap();
    assert_eq!(data.role(), Role::IntendedParent);
    assert_eq!(data.name(), "Ana");
}

#[test]
fn signup_rejects_admin_role() {
    assert_eq!(
        SignupData::new("Ana", "a@b.com", "secret", Role::Admin),
        Err(FormError::RoleNotSelfService(Role::Admin))
    );
}

#[test]
fn signup_rejects_blank_name() {
    assert_eq!(
        SignupData::new(" ", "a@b.com", "secret", Role::Surrogate),
        Err(FormError::MissingField("name"))
    );
}

#[test]
fn signup_admin_rejected_on_deserialize() {
    let raw = r#"{"name":"Ana","email":"a@b.com","password":"x","role":"admin"}"#;
    assert!(serde_json::from_str::<SignupData>(raw).is_err());
}

#[test]
fn session_record_round_trips_through_json() {
    let record = SessionRecord { token: "tok-123".to_owned(), user: ana() };
    let raw = serde_json::to_string(&record).unwrap();
    let back: SessionRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, record);
}
