use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: String::new(),
        subject: "Plans".to_owned(),
        message: "Tell me more.".to_owned(),
    }
}

#[test]
fn complete_form_is_valid() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn phone_and_subject_are_optional() {
    let form = ContactForm { subject: String::new(), ..filled() };
    assert!(form.validate().is_ok());
}

#[test]
fn first_blank_required_field_is_reported() {
    let form = ContactForm { name: " ".to_owned(), message: String::new(), ..filled() };
    assert_eq!(form.validate(), Err(ContactError::MissingField("name")));
}

#[test]
fn blank_message_is_rejected() {
    let form = ContactForm { message: "\n".to_owned(), ..filled() };
    assert_eq!(form.validate().unwrap_err().to_string(), "message is required");
}

#[test]
fn malformed_email_is_rejected() {
    for email in ["ana", "ana@", "@example.com", "ana@example", "ana @example.com", "ana@.com"] {
        let form = ContactForm { email: email.to_owned(), ..filled() };
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{email}");
    }
}

#[test]
fn surrounding_whitespace_in_email_is_tolerated() {
    let form = ContactForm { email: "  ana@example.com ".to_owned(), ..filled() };
    assert!(form.validate().is_ok());
}
