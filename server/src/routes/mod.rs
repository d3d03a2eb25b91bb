//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the two function endpoints (`countBooks`, `sendEmail`) and the
//! catalog REST endpoints under one Axum router. CORS mirrors the caller's
//! origin so the browser client can call the functions from any host.
//! [`leptos_app`] adds the server-rendered bookshelf app on top.

pub mod catalog;
pub mod mail;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Request body cap. Inline base64 attachments exceed the 2 MiB axum default.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/countBooks", any(catalog::count_books))
        .route("/sendEmail", any(mail::send_email))
        .route("/api/books", get(catalog::list_books).post(catalog::create_book))
        .route("/api/authors", get(catalog::list_authors).post(catalog::create_author))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Function endpoints plus the Leptos SSR app and its `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*` env).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(app(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
