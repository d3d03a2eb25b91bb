//! Email/password sign-in page.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{AFTER_AUTH_PATH, settle};
use crate::app::Services;
use crate::error::ClientError;
use crate::identity::Identity;
use crate::util::validate::validate_credentials;

#[derive(Clone, Debug, Default)]
pub struct SignInPage {
    pub email: String,
    pub password: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl SignInPage {
    /// Sign in and return the path to navigate to.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any provider call, or the provider's
    /// error. Either way the message is also stored in `error`.
    pub async fn submit(&mut self, identity: &Identity) -> Result<&'static str, ClientError> {
        if self.busy {
            return Err(ClientError::Validation("Sign-in already in progress.".into()));
        }
        let result = match validate_credentials(&self.email, &self.password) {
            Ok((email, password)) => {
                self.busy = true;
                let outcome = identity.sign_in(&email, &password).await;
                self.busy = false;
                outcome.map(|_| AFTER_AUTH_PATH)
            }
            Err(msg) => Err(ClientError::Validation(msg.to_owned())),
        };
        if result.is_ok() {
            self.password.clear();
        }
        settle(&mut self.error, result)
    }
}

#[component]
pub fn SignInView() -> impl IntoView {
    let services = expect_context::<Services>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignInPage::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let mut draft = form.get_untracked();
            form.update(|f| f.busy = true);
            let identity = services.identity();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match identity {
                    Ok(identity) => draft.submit(&identity).await,
                    Err(e) => settle(&mut draft.error, Err(e)),
                };
                form.set(draft);
                if let Ok(path) = outcome {
                    navigate(path, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&services, &navigate, NavigateOptions::default());
        }
    };

    view! {
        <section>
            <h1>"Sign in"</h1>
            <form class="form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <button type="submit" disabled=move || form.with(|f| f.busy)>"Sign in"</button>
            </form>
            <p class="message message--error">{move || form.with(|f| f.error.clone())}</p>
            <p>"No account? " <a href="/firebase-register">"Register"</a></p>
        </section>
    }
}
