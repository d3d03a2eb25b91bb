use super::*;

#[test]
fn email_shape() {
    assert!(is_valid_email("reader@example.com"));
    assert!(is_valid_email("a.b+c@mail.example.org"));
    assert!(!is_valid_email("reader"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("reader@example"));
    assert!(!is_valid_email("reader@.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("read er@example.com"));
}

#[test]
fn credentials_are_trimmed_and_checked() {
    assert_eq!(
        validate_credentials("  reader@example.com ", "secret1"),
        Ok(("reader@example.com".to_owned(), "secret1".to_owned()))
    );
    assert_eq!(validate_credentials("", "secret1"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("reader", "secret1"), Err("Enter a valid email address."));
    assert_eq!(validate_credentials("reader@example.com", "12345"), Err("Password must be at least 6 characters."));
}

#[test]
fn registration_requires_matching_confirmation() {
    assert!(validate_registration("a@b.com", "secret1", "secret1").is_ok());
    assert_eq!(validate_registration("a@b.com", "secret1", "secret2"), Err("Passwords do not match."));
    assert_eq!(validate_registration("a@b.com", "short", "short"), Err("Password must be at least 6 characters."));
}

#[test]
fn recipient_lists() {
    assert!(is_valid_recipient_list("a@b.com"));
    assert!(is_valid_recipient_list("a@b.com, c@d.org"));
    assert!(!is_valid_recipient_list("a@b.com, nope"));
    assert!(!is_valid_recipient_list(""));
}
