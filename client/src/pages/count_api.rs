//! Book count computed by the `countBooks` function.

use leptos::prelude::*;

use super::book_count::count_label;
use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::functions::FunctionsApi;

#[derive(Clone, Debug, Default)]
pub struct CountApiPage {
    pub count: Option<u64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CountApiPage {
    /// # Errors
    ///
    /// Returns the function's error, mirrored into `error`.
    pub async fn load(&mut self, functions: &dyn FunctionsApi) -> Result<u64, ClientError> {
        self.loading = true;
        let result = functions.count_books().await;
        self.loading = false;
        self.count = result.as_ref().ok().copied();
        settle(&mut self.error, result)
    }
}

#[component]
pub fn CountApiView() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(CountApiPage::default());

    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let functions = services.config.functions();
            leptos::task::spawn_local(async move {
                page.update(|p| p.loading = true);
                let mut next = page.get_untracked();
                let _ = next.load(&functions).await;
                page.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &services;
        }
    };

    view! {
        <section>
            <h1>"Count books (API)"</h1>
            <button type="button" on:click=on_refresh disabled=move || page.with(|p| p.loading)>
                "Get book count"
            </button>
            <p>{move || page.with(|p| count_label(p.count, p.loading))}</p>
            <p class="message message--error">{move || page.with(|p| p.error.clone())}</p>
        </section>
    }
}

#[cfg(test)]
#[path = "count_api_test.rs"]
mod count_api_test;
