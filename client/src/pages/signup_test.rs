use super::*;

#[test]
fn form_builds_signup_for_self_service_role() {
    let data = signup_form("Ana", " ana@example.com ", "secret", "surrogate").unwrap();
    assert_eq!(data.email(), "ana@example.com");
    assert_eq!(data.role(), Role::Surrogate);
}

#[test]
fn form_rejects_admin_role() {
    let err = signup_form("Ana", "ana@example.com", "secret", "admin").unwrap_err();
    assert_eq!(err, FormError::RoleNotSelfService(Role::Admin));
}

#[test]
fn form_rejects_unknown_role() {
    let err = signup_form("Ana", "ana@example.com", "secret", "donor").unwrap_err();
    assert_eq!(err, FormError::UnknownRole("donor".to_owned()));
}

#[test]
fn form_requires_name() {
    let err = signup_form(" ", "ana@example.com", "secret", "surrogate").unwrap_err();
    assert_eq!(err, FormError::MissingField("name"));
}

#[test]
fn role_labels_use_wire_names() {
    assert_eq!(role_label_key(Role::IntendedParent), "roles.intended_parent");
    assert_eq!(role_label_key(Role::Surrogate), "roles.surrogate");
}
