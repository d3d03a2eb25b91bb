//! Top navigation: links for the current identity status plus sign-out.

use leptos::prelude::*;

use crate::app::Services;
use crate::pages::home::{nav_label, nav_links};
use crate::state::auth::AuthStatus;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthStatus>>();
    let services = expect_context::<Services>();

    let signed_in_as = move || {
        auth.get()
            .user()
            .map(|user| user.email.clone().unwrap_or_else(|| user.uid.clone()))
    };

    // Protected pages redirect themselves once the signed-out status lands.
    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let identity = services.identity();
            leptos::task::spawn_local(async move {
                let result = match identity {
                    Ok(identity) => identity.sign_out().await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    tracing::warn!(error = %e, "sign-out failed");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &services;
        }
    };

    view! {
        <nav class="nav">
            {move || {
                nav_links(&auth.get())
                    .into_iter()
                    .map(|route| view! { <a href=route.path>{nav_label(route.page)}</a> })
                    .collect_view()
            }}
            <Show when=move || signed_in_as().is_some()>
                <span class="nav__user">{move || signed_in_as().unwrap_or_default()}</span>
                <button type="button" on:click=on_sign_out.clone()>"Sign out"</button>
            </Show>
        </nav>
    }
}
