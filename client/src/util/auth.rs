//! Route-level auth helpers for the Leptos views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same redirect: once the identity signal
//! reports `Unauthenticated`, go to the sign-in page. While it is still
//! `Unknown` nothing happens, so a reload does not bounce a signed-in user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::router::{Navigation, Page, guard, route_for};
use crate::state::auth::AuthStatus;

/// Where a visit to `page` must be sent instead, if anywhere.
#[must_use]
pub fn redirect_target(page: Page, status: &AuthStatus) -> Option<&'static str> {
    match guard(route_for(page), status) {
        Navigation::Redirect(target) => Some(target),
        _ => None,
    }
}

/// `page` may render for this status.
#[must_use]
pub fn may_render(page: Page, status: &AuthStatus) -> bool {
    matches!(guard(route_for(page), status), Navigation::Proceed(_))
}

/// Redirect away from `page` whenever the identity signal rules it out.
pub fn install_auth_redirect<F>(page: Page, auth: RwSignal<AuthStatus>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(page, &auth.get()) {
            tracing::debug!(?page, to = target, "guard: redirecting signed-out visitor");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
