//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::require_auth::RequireAuth;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::identity::Identity;
use crate::pages::add_book::AddBookView;
use crate::pages::book_count::BookCountView;
use crate::pages::count_api::CountApiView;
use crate::pages::export::ExportView;
use crate::pages::home::{AboutView, HomeView};
use crate::pages::map::MapView;
use crate::pages::register::RegisterView;
use crate::pages::send_email::SendEmailView;
use crate::pages::signin::SignInView;
use crate::pages::tables::{AuthorsTableView, BooksTableView};
use crate::pages::weather::WeatherView;
use crate::router::{Page, route_for};
use crate::state::auth::AuthStatus;

/// Service handles shared by every view.
#[derive(Clone)]
pub struct Services {
    pub config: ClientConfig,
    identity: Option<Arc<Identity>>,
}

impl Services {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let identity = match config.identity_provider() {
            Ok(provider) => Some(Arc::new(Identity::new(Arc::new(provider)))),
            Err(e) => {
                tracing::warn!(error = %e, "identity provider not configured; sign-in disabled");
                None
            }
        };
        Self { config, identity }
    }

    /// The shared identity signal.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when no identity provider is configured.
    pub fn identity(&self) -> Result<Arc<Identity>, ClientError> {
        self.identity.clone().ok_or(ClientError::Config("FIREBASE_API_KEY"))
    }
}

/// Static segment for one entry of the route table.
fn segment(page: Page) -> StaticSegment<&'static str> {
    StaticSegment(route_for(page).segment())
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the identity signal and service handles, then routes every entry
/// of the route table. Protected pages render inside [`RequireAuth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = if cfg!(feature = "hydrate") { ClientConfig::from_build_env() } else { ClientConfig::from_env() };
    let services = Services::new(config);
    let auth = RwSignal::new(AuthStatus::Unknown);

    #[cfg(feature = "hydrate")]
    sync_identity(services.identity.clone(), auth);

    provide_context(auth);
    provide_context(services);

    view! {
        <Stylesheet id="leptos" href="/pkg/bookshelf.css"/>
        <Title text="Bookshelf"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=segment(Page::Home) view=HomeView/>
                    <Route path=segment(Page::About) view=AboutView/>
                    <Route path=segment(Page::SignIn) view=SignInView/>
                    <Route path=segment(Page::Register) view=RegisterView/>
                    <Route
                        path=segment(Page::AddBook)
                        view=|| view! { <RequireAuth page=Page::AddBook><AddBookView/></RequireAuth> }
                    />
                    <Route
                        path=segment(Page::BookCount)
                        view=|| view! { <RequireAuth page=Page::BookCount><BookCountView/></RequireAuth> }
                    />
                    <Route path=segment(Page::Weather) view=WeatherView/>
                    <Route path=segment(Page::CountBookApi) view=CountApiView/>
                    <Route
                        path=segment(Page::SendEmail)
                        view=|| view! { <RequireAuth page=Page::SendEmail><SendEmailView/></RequireAuth> }
                    />
                    <Route path=segment(Page::AuthorsTable) view=AuthorsTableView/>
                    <Route path=segment(Page::BooksTable) view=BooksTableView/>
                    <Route path=segment(Page::Map) view=MapView/>
                    <Route path=segment(Page::Export) view=ExportView/>
                </Routes>
            </main>
        </Router>
    }
}

/// Restore the saved session and mirror every identity push into `auth`.
#[cfg(feature = "hydrate")]
fn sync_identity(identity: Option<Arc<Identity>>, auth: RwSignal<AuthStatus>) {
    use crate::util::session::{load_user, save_user};

    leptos::task::spawn_local(async move {
        let Some(identity) = identity else {
            auth.set(AuthStatus::Unauthenticated);
            return;
        };
        let mut updates = identity.subscribe();
        identity.restore(load_user());
        loop {
            let status = updates.borrow_and_update().clone();
            save_user(status.user());
            auth.set(status);
            if updates.changed().await.is_err() {
                break;
            }
        }
    });
}
