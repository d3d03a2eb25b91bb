//! Bookshelf browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! A Leptos app rendered on the functions server and hydrated in the browser.
//! `app` declares the routes, `components` the shared chrome, and each
//! `pages` module pairs a plain view model with the `#[component]` that
//! renders it. The identity signal, the route guard, and the typed service
//! clients sit underneath. The functions server also depends on `net::types`
//! for the shared wire schema.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod identity;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
