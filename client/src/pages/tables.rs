//! Books and authors tables.
//!
//! Both pages load a whole collection once and then filter, sort, and page
//! it locally through [`TableQuery`]. The authors page also carries a small
//! add-author form.

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;

use leptos::prelude::*;

use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::catalog::{AuthorRepository, BookRepository};
use crate::net::types::{Author, Book};
use crate::util::table::{SortSpec, TablePage, TableQuery, TableRow};

/// Loaded rows plus the current table query.
#[derive(Clone, Debug)]
pub struct CatalogTable<T> {
    pub rows: Vec<T>,
    pub query: TableQuery,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CatalogTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), query: TableQuery::default(), loading: false, error: None }
    }
}

impl<T: TableRow + Clone> CatalogTable<T> {
    #[must_use]
    pub fn columns(&self) -> &'static [&'static str] {
        T::columns()
    }

    #[must_use]
    pub fn visible(&self) -> TablePage<T> {
        self.query.apply(&self.rows)
    }

    fn finish(&mut self, result: Result<Vec<T>, ClientError>) -> Result<usize, ClientError> {
        self.loading = false;
        let result = result.map(|rows| {
            self.rows = rows;
            self.rows.len()
        });
        settle(&mut self.error, result)
    }
}

pub type BooksTablePage = CatalogTable<Book>;

impl CatalogTable<Book> {
    /// # Errors
    ///
    /// Returns the repository error; previously loaded rows are kept.
    pub async fn load(&mut self, books: &dyn BookRepository) -> Result<usize, ClientError> {
        self.loading = true;
        let result = books.list_books().await;
        self.finish(result)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthorsTablePage {
    pub table: CatalogTable<Author>,
    pub new_name: String,
    pub new_nationality: String,
    pub new_birth_year: String,
}

impl AuthorsTablePage {
    /// # Errors
    ///
    /// Returns the repository error; previously loaded rows are kept.
    pub async fn load(&mut self, authors: &dyn AuthorRepository) -> Result<usize, ClientError> {
        self.table.loading = true;
        let result = authors.list_authors().await;
        self.table.finish(result)
    }

    /// Author from the add form. Birth year is optional but must be a number.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn draft(&self) -> Result<Author, &'static str> {
        let name = self.new_name.trim();
        if name.is_empty() {
            return Err("Enter the author's name.");
        }
        let birth_year = match self.new_birth_year.trim() {
            "" => None,
            year => Some(year.parse::<i32>().map_err(|_| "Birth year must be a number.")?),
        };
        let nationality = Some(self.new_nationality.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_owned);
        Ok(Author { name: name.to_owned(), nationality, birth_year, ..Author::default() })
    }

    /// Store the drafted author and append it to the table.
    ///
    /// # Errors
    ///
    /// Returns a validation or repository error, mirrored into the table's `error`.
    pub async fn add(&mut self, authors: &dyn AuthorRepository) -> Result<Author, ClientError> {
        let result = match self.draft() {
            Ok(author) => authors.add_author(&author).await,
            Err(msg) => Err(ClientError::Validation(msg.to_owned())),
        };
        if let Ok(stored) = &result {
            self.table.rows.push(stored.clone());
            self.new_name.clear();
            self.new_nationality.clear();
            self.new_birth_year.clear();
        }
        settle(&mut self.table.error, result)
    }
}

/// Column header with an arrow on the sorted column.
#[must_use]
pub fn header_label(column: &str, sort: Option<&SortSpec>) -> String {
    let title = column.replace('_', " ");
    match sort {
        Some(spec) if spec.column == column && spec.descending => format!("{title} ▼"),
        Some(spec) if spec.column == column => format!("{title} ▲"),
        _ => title,
    }
}

/// Footer text, e.g. `Page 2 of 3 (23 rows)`.
#[must_use]
pub fn page_label<T>(page: &TablePage<T>) -> String {
    format!("Page {} of {} ({} rows)", page.page + 1, page.page_count, page.total)
}

// =============================================================================
// VIEWS
// =============================================================================

fn books_table(table: &CatalogTable<Book>) -> &CatalogTable<Book> {
    table
}

fn books_table_mut(table: &mut CatalogTable<Book>) -> &mut CatalogTable<Book> {
    table
}

fn authors_table(page: &AuthorsTablePage) -> &CatalogTable<Author> {
    &page.table
}

fn authors_table_mut(page: &mut AuthorsTablePage) -> &mut CatalogTable<Author> {
    &mut page.table
}

/// Filter box, sortable grid, and pager over the table inside `state`.
fn table_grid<S, T>(
    state: RwSignal<S>,
    get: fn(&S) -> &CatalogTable<T>,
    get_mut: fn(&mut S) -> &mut CatalogTable<T>,
) -> impl IntoView
where
    S: Send + Sync + 'static,
    T: TableRow + Clone + Send + Sync + 'static,
{
    let headers = T::columns()
        .iter()
        .map(|&column| {
            view! {
                <th on:click=move |_| state.update(|s| get_mut(s).query.toggle_sort(column))>
                    {move || state.with(|s| header_label(column, get(s).query.sort.as_ref()))}
                </th>
            }
        })
        .collect_view();

    let on_prev = move |_| {
        state.update(|s| {
            let query = &mut get_mut(s).query;
            query.page = query.page.saturating_sub(1);
        });
    };
    let on_next = move |_| {
        state.update(|s| {
            let table = get_mut(s);
            let visible = table.visible();
            table.query.page = (visible.page + 1).min(visible.page_count - 1);
        });
    };

    view! {
        <input
            type="search"
            placeholder="Filter"
            prop:value=move || state.with(|s| get(s).query.filter.clone())
            on:input=move |ev| state.update(|s| get_mut(s).query.set_filter(event_target_value(&ev)))
        />
        <table class="table">
            <thead>
                <tr>{headers}</tr>
            </thead>
            <tbody>
                {move || {
                    state.with(|s| {
                        get(s)
                            .visible()
                            .rows
                            .into_iter()
                            .map(|row| {
                                let cells = T::columns()
                                    .iter()
                                    .map(|column| view! { <td>{row.cell(column)}</td> })
                                    .collect_view();
                                view! { <tr>{cells}</tr> }
                            })
                            .collect_view()
                    })
                }}
            </tbody>
        </table>
        <div class="pager">
            <button type="button" on:click=on_prev>"Previous"</button>
            <span>{move || state.with(|s| page_label(&get(s).visible()))}</span>
            <button type="button" on:click=on_next>"Next"</button>
        </div>
        <Show when=move || state.with(|s| get(s).loading)>
            <p class="message">"Loading..."</p>
        </Show>
        <p class="message message--error">{move || state.with(|s| get(s).error.clone())}</p>
    }
}

#[component]
pub fn BooksTableView() -> impl IntoView {
    let services = expect_context::<Services>();
    let state = RwSignal::new(BooksTablePage::default());

    #[cfg(feature = "hydrate")]
    {
        let books = services.config.catalog();
        leptos::task::spawn_local(async move {
            state.update(|t| t.loading = true);
            let mut next = state.get_untracked();
            let _ = next.load(&books).await;
            state.set(next);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &services;
    }

    view! {
        <section>
            <h1>"Books"</h1>
            {table_grid(state, books_table, books_table_mut)}
        </section>
    }
}

#[component]
pub fn AuthorsTableView() -> impl IntoView {
    let services = expect_context::<Services>();
    let state = RwSignal::new(AuthorsTablePage::default());

    #[cfg(feature = "hydrate")]
    {
        let authors = services.config.catalog();
        leptos::task::spawn_local(async move {
            state.update(|p| p.table.loading = true);
            let mut next = state.get_untracked();
            let _ = next.load(&authors).await;
            state.set(next);
        });
    }

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let mut next = state.get_untracked();
            let authors = services.config.catalog();
            leptos::task::spawn_local(async move {
                let _ = next.add(&authors).await;
                state.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &services;
        }
    };

    view! {
        <section>
            <h1>"Authors"</h1>
            <form class="form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || state.with(|p| p.new_name.clone())
                    on:input=move |ev| state.update(|p| p.new_name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Nationality"
                    prop:value=move || state.with(|p| p.new_nationality.clone())
                    on:input=move |ev| state.update(|p| p.new_nationality = event_target_value(&ev))
                />
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Birth year"
                    prop:value=move || state.with(|p| p.new_birth_year.clone())
                    on:input=move |ev| state.update(|p| p.new_birth_year = event_target_value(&ev))
                />
                <button type="submit">"Add author"</button>
            </form>
            {table_grid(state, authors_table, authors_table_mut)}
        </section>
    }
}
