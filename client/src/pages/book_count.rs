//! Book count read directly from the catalog.

use leptos::prelude::*;

use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::catalog::BookRepository;

#[derive(Clone, Debug, Default)]
pub struct BookCountPage {
    pub count: Option<usize>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BookCountPage {
    /// # Errors
    ///
    /// Returns the repository error, mirrored into `error`.
    pub async fn load(&mut self, books: &dyn BookRepository) -> Result<usize, ClientError> {
        self.loading = true;
        let result = books.list_books().await.map(|list| list.len());
        self.loading = false;
        self.count = result.as_ref().ok().copied();
        settle(&mut self.error, result)
    }
}

/// Text for the current state of a count page.
#[must_use]
pub fn count_label(count: Option<impl std::fmt::Display>, loading: bool) -> String {
    match (count, loading) {
        (_, true) => "Counting books...".to_owned(),
        (Some(count), false) => format!("Total books: {count}"),
        (None, false) => String::new(),
    }
}

#[component]
pub fn BookCountView() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(BookCountPage::default());

    #[cfg(feature = "hydrate")]
    {
        let books = services.config.catalog();
        leptos::task::spawn_local(async move {
            page.update(|p| p.loading = true);
            let mut next = page.get_untracked();
            let _ = next.load(&books).await;
            page.set(next);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &services;
    }

    view! {
        <section>
            <h1>"Book count"</h1>
            <p>{move || page.with(|p| count_label(p.count, p.loading))}</p>
            <p class="message message--error">{move || page.with(|p| p.error.clone())}</p>
        </section>
    }
}

#[cfg(test)]
#[path = "book_count_test.rs"]
mod book_count_test;
