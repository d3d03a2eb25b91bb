//! Home and About pages: static content plus the navigation menu.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::router::{Page, ROUTES, Route};
use crate::state::auth::AuthStatus;

pub const ABOUT_TEXT: &str = "Bookshelf keeps a shared catalog of books and authors. \
Sign in to add books, check the collection size, or send mail from the app.";

/// Menu entries for the current identity status. Protected pages are listed
/// only when signed in; the sign-in and register pages only when signed out.
#[must_use]
pub fn nav_links(status: &AuthStatus) -> Vec<&'static Route> {
    ROUTES
        .iter()
        .filter(|route| match route.page {
            Page::SignIn | Page::Register => !status.is_authenticated(),
            _ => !route.requires_auth || status.is_authenticated(),
        })
        .collect()
}

/// Menu text for a page.
#[must_use]
pub fn nav_label(page: Page) -> &'static str {
    match page {
        Page::Home => "Home",
        Page::About => "About",
        Page::SignIn => "Sign in",
        Page::Register => "Register",
        Page::AddBook => "Add book",
        Page::BookCount => "Book count",
        Page::Weather => "Weather",
        Page::CountBookApi => "Count (API)",
        Page::SendEmail => "Send email",
        Page::AuthorsTable => "Authors",
        Page::BooksTable => "Books",
        Page::Map => "Map",
        Page::Export => "Export",
    }
}

/// Greeting shown on the home page.
#[must_use]
pub fn greeting(status: &AuthStatus) -> String {
    match status.user() {
        Some(user) => {
            let name = user
                .display_name
                .as_deref()
                .or(user.email.as_deref())
                .unwrap_or("reader");
            format!("Welcome back, {name}.")
        }
        None => "Welcome to Bookshelf.".to_owned(),
    }
}

#[component]
pub fn HomeView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthStatus>>();

    view! {
        <section>
            <h1>"Bookshelf"</h1>
            <p>{move || greeting(&auth.get())}</p>
        </section>
    }
}

#[component]
pub fn AboutView() -> impl IntoView {
    view! {
        <section>
            <h1>"About"</h1>
            <p>{ABOUT_TEXT}</p>
        </section>
    }
}
