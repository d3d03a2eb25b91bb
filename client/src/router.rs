//! Route table and the auth guard.
//!
//! DESIGN
//! ======
//! [`ROUTES`] is the one list of client routes. `app` declares a
//! `leptos_router` route for each entry from [`Route::segment`], and the
//! `RequireAuth` wrapper asks [`guard`] whether a protected page may render.
//!
//! `guard` is a pure function of a route and an explicit [`AuthStatus`].
//! When the status is still `Unknown` a protected route yields `Pending`
//! instead of redirecting; `navigate` then waits for the first provider push
//! before deciding. `resolve` does the same for a raw path, such as a deep
//! link or a stored return target: matching there is case-insensitive,
//! tolerates a trailing slash, and ignores the query string and fragment.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use tokio::sync::watch;

use crate::state::auth::AuthStatus;

pub const SIGN_IN_PATH: &str = "/firebase-signin";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    SignIn,
    Register,
    AddBook,
    BookCount,
    Weather,
    CountBookApi,
    SendEmail,
    AuthorsTable,
    BooksTable,
    Map,
    Export,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub requires_auth: bool,
}

impl Route {
    /// Path without the leading slash, as a `leptos_router` static segment.
    #[must_use]
    pub fn segment(&self) -> &'static str {
        let path: &'static str = self.path;
        path.trim_start_matches('/')
    }
}

const fn route(path: &'static str, name: &'static str, page: Page, requires_auth: bool) -> Route {
    Route { path, name, page, requires_auth }
}

pub const ROUTES: &[Route] = &[
    route("/", "Home", Page::Home, false),
    route("/about", "About", Page::About, false),
    route(SIGN_IN_PATH, "FirebaseSignin", Page::SignIn, false),
    route("/firebase-register", "FireRegister", Page::Register, false),
    route("/add-book", "AddBook", Page::AddBook, true),
    route("/get-book-count", "GetBookCount", Page::BookCount, true),
    route("/WeatherCheck", "GetWeather", Page::Weather, false),
    route("/CountBookAPI", "CountBookAPI", Page::CountBookApi, false),
    route("/send-email", "SendEmail", Page::SendEmail, true),
    route("/authors-table", "AuthorsTable", Page::AuthorsTable, false),
    route("/books-table", "BooksTable", Page::BooksTable, false),
    route("/map", "Map", Page::Map, false),
    route("/export", "Export", Page::Export, false),
];

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed(&'static Route),
    Redirect(&'static str),
    /// Protected route while the identity status is still unknown.
    Pending,
    NotFound,
}

/// Strip query and fragment and a single trailing slash (except on `/`).
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

#[must_use]
pub fn match_route(path: &str) -> Option<&'static Route> {
    let path = normalize(path);
    let path = if path.is_empty() { "/" } else { path };
    ROUTES.iter().find(|r| r.path.eq_ignore_ascii_case(path))
}

#[must_use]
pub fn route_for(page: Page) -> &'static Route {
    ROUTES
        .iter()
        .find(|r| r.page == page)
        .unwrap_or(&ROUTES[0])
}

/// Decide a navigation to a raw path against the given identity status.
#[must_use]
pub fn resolve(path: &str, status: &AuthStatus) -> Navigation {
    match match_route(path) {
        Some(route) => guard(route, status),
        None => Navigation::NotFound,
    }
}

/// Decide whether an already-matched route may render.
#[must_use]
pub fn guard(route: &'static Route, status: &AuthStatus) -> Navigation {
    if !route.requires_auth {
        return Navigation::Proceed(route);
    }
    match status {
        AuthStatus::Authenticated(_) => Navigation::Proceed(route),
        AuthStatus::Unauthenticated => Navigation::Redirect(SIGN_IN_PATH),
        AuthStatus::Unknown => Navigation::Pending,
    }
}

/// Resolve `path`, waiting for the first known identity status if needed.
///
/// A closed identity channel is treated as signed out.
pub async fn navigate(path: &str, status: &mut watch::Receiver<AuthStatus>) -> Navigation {
    let current = status.borrow().clone();
    match resolve(path, &current) {
        Navigation::Pending => {
            let known = status
                .wait_for(AuthStatus::is_known)
                .await
                .map_or(AuthStatus::Unauthenticated, |known| known.clone());
            tracing::debug!(path, authenticated = known.is_authenticated(), "guard: identity settled");
            resolve(path, &known)
        }
        decided => decided,
    }
}
