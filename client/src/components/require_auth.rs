//! Wrapper that renders a protected page only for a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::router::Page;
use crate::state::auth::AuthStatus;
use crate::util::auth::{install_auth_redirect, may_render};

pub const CHECKING_MESSAGE: &str = "Checking sign-in...";

/// Render `children` once the guard lets `page` through. While the identity
/// status is unknown a placeholder is shown; a signed-out visitor is sent to
/// the sign-in page.
#[component]
pub fn RequireAuth(page: Page, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthStatus>>();
    install_auth_redirect(page, auth, use_navigate());

    view! {
        <Show
            when=move || may_render(page, &auth.get())
            fallback=|| view! { <p class="message">{CHECKING_MESSAGE}</p> }
        >
            {children()}
        </Show>
    }
}
