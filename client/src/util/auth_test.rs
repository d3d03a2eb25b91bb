use super::*;
use crate::net::types::User;
use crate::router::SIGN_IN_PATH;

fn signed_in() -> AuthStatus {
    AuthStatus::Authenticated(User { uid: "u1".into(), email: Some("a@b.com".into()), display_name: None, id_token: None })
}

#[test]
fn signed_out_visitor_is_sent_to_sign_in() {
    for page in [Page::AddBook, Page::BookCount, Page::SendEmail] {
        assert_eq!(redirect_target(page, &AuthStatus::Unauthenticated), Some(SIGN_IN_PATH));
        assert!(!may_render(page, &AuthStatus::Unauthenticated));
    }
}

#[test]
fn no_redirect_while_status_unknown() {
    assert_eq!(redirect_target(Page::AddBook, &AuthStatus::Unknown), None);
    assert!(!may_render(Page::AddBook, &AuthStatus::Unknown));
}

#[test]
fn signed_in_user_renders_protected_page() {
    assert_eq!(redirect_target(Page::SendEmail, &signed_in()), None);
    assert!(may_render(Page::SendEmail, &signed_in()));
}

#[test]
fn public_pages_render_for_everyone() {
    for status in [AuthStatus::Unknown, AuthStatus::Unauthenticated, signed_in()] {
        assert!(may_render(Page::BooksTable, &status));
        assert_eq!(redirect_target(Page::BooksTable, &status), None);
    }
}
