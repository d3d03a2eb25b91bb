//! Add-book form.

#[cfg(test)]
#[path = "add_book_test.rs"]
mod add_book_test;

use leptos::prelude::*;

use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::catalog::BookRepository;
use crate::net::types::Book;

pub const BOOK_ADDED_MESSAGE: &str = "Book added successfully!";

#[derive(Clone, Debug, Default)]
pub struct AddBookPage {
    pub isbn: String,
    pub name: String,
    pub busy: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// ISBN must be digits only (hyphens and spaces are ignored); name must be non-blank.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_book(isbn: &str, name: &str) -> Result<Book, &'static str> {
    let isbn: String = isbn.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    let name = name.trim();
    if isbn.is_empty() || name.is_empty() {
        return Err("Enter both ISBN and name.");
    }
    if !isbn.chars().all(|c| c.is_ascii_digit()) {
        return Err("ISBN must be a number.");
    }
    Ok(Book { isbn, name: name.to_owned(), ..Book::default() })
}

impl AddBookPage {
    /// # Errors
    ///
    /// Returns a validation or repository error, mirrored into `error`.
    pub async fn submit(&mut self, books: &dyn BookRepository) -> Result<Book, ClientError> {
        self.notice = None;
        let result = match validate_book(&self.isbn, &self.name) {
            Ok(book) => {
                self.busy = true;
                let stored = books.add_book(&book).await;
                self.busy = false;
                stored
            }
            Err(msg) => Err(ClientError::Validation(msg.to_owned())),
        };
        if result.is_ok() {
            self.isbn.clear();
            self.name.clear();
            self.notice = Some(BOOK_ADDED_MESSAGE.to_owned());
        }
        settle(&mut self.error, result)
    }
}

#[component]
pub fn AddBookView() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(AddBookPage::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let mut draft = form.get_untracked();
            form.update(|f| f.busy = true);
            let books = services.config.catalog();
            leptos::task::spawn_local(async move {
                let _ = draft.submit(&books).await;
                form.set(draft);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &services;
        }
    };

    view! {
        <section>
            <h1>"Add book"</h1>
            <form class="form" on:submit=on_submit>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="ISBN"
                    prop:value=move || form.with(|f| f.isbn.clone())
                    on:input=move |ev| form.update(|f| f.isbn = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <button type="submit" disabled=move || form.with(|f| f.busy)>"Add book"</button>
            </form>
            <p class="message">{move || form.with(|f| f.notice.clone())}</p>
            <p class="message message--error">{move || form.with(|f| f.error.clone())}</p>
        </section>
    }
}
