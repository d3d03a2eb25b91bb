use super::*;
use crate::net::types::User;

#[test]
fn signed_out_menu_hides_protected_pages() {
    let paths: Vec<_> = nav_links(&AuthStatus::Unauthenticated).iter().map(|r| r.path).collect();
    assert!(paths.contains(&"/firebase-signin"));
    assert!(!paths.contains(&"/add-book"));
    assert_eq!(paths.len(), 10);
}

#[test]
fn signed_in_menu_swaps_auth_links_for_protected_pages() {
    let status = AuthStatus::Authenticated(User { uid: "u".into(), email: Some("a@b.com".into()), display_name: None, id_token: None });
    let paths: Vec<_> = nav_links(&status).iter().map(|r| r.path).collect();
    assert!(paths.contains(&"/send-email"));
    assert!(!paths.contains(&"/firebase-register"));
    assert_eq!(paths.len(), 11);
    assert_eq!(greeting(&status), "Welcome back, a@b.com.");
}

#[test]
fn unknown_status_greets_anonymously() {
    assert_eq!(greeting(&AuthStatus::Unknown), "Welcome to Bookshelf.");
}

#[test]
fn every_page_has_a_menu_label() {
    for route in ROUTES {
        assert!(!nav_label(route.page).is_empty());
    }
    assert_eq!(nav_label(Page::CountBookApi), "Count (API)");
}

#[test]
fn about_view_renders_about_text() {
    let html = view! { <AboutView/> }.to_html();
    assert!(html.contains("<h1>About</h1>"));
    assert!(html.contains(ABOUT_TEXT));
}

#[test]
fn home_view_greets_from_identity_signal() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(AuthStatus::Unauthenticated));
        let html = view! { <HomeView/> }.to_html();
        assert!(html.contains("Welcome to Bookshelf."));
    });
}
