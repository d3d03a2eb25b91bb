use super::*;

fn user() -> User {
    User { uid: "u1".into(), email: Some("reader@example.com".into()), display_name: None, id_token: None }
}

#[test]
fn default_status_is_unknown() {
    let status = AuthStatus::default();
    assert!(!status.is_known());
    assert!(!status.is_authenticated());
    assert!(status.user().is_none());
}

#[test]
fn provider_push_maps_to_known_status() {
    let signed_in = AuthStatus::from(Some(user()));
    assert!(signed_in.is_known());
    assert!(signed_in.is_authenticated());
    assert_eq!(signed_in.user().map(|u| u.uid.as_str()), Some("u1"));

    let signed_out = AuthStatus::from(None);
    assert_eq!(signed_out, AuthStatus::Unauthenticated);
    assert!(signed_out.is_known());
    assert!(!signed_out.is_authenticated());
}
