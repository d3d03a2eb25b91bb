//! Export page: download the books or authors collection as CSV or JSON.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use leptos::prelude::*;

use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::catalog::{AuthorRepository, BookRepository};
use crate::util::export::{to_csv, to_json};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dataset {
    #[default]
    Books,
    Authors,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl Dataset {
    /// Value used in the dataset `<select>`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Authors => "authors",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key == "authors" { Self::Authors } else { Self::Books }
    }
}

impl ExportFormat {
    /// Value used in the format `<select>`.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.extension()
    }

    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key == "json" { Self::Json } else { Self::Csv }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    fn mime(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

/// A rendered download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

#[derive(Clone, Debug, Default)]
pub struct ExportPage {
    pub dataset: Dataset,
    pub format: ExportFormat,
    pub busy: bool,
    pub error: Option<String>,
}

impl ExportPage {
    /// Fetch the selected collection and render it.
    ///
    /// # Errors
    ///
    /// Returns the repository or rendering error, mirrored into `error`.
    pub async fn build(&mut self, books: &dyn BookRepository, authors: &dyn AuthorRepository) -> Result<ExportFile, ClientError> {
        self.busy = true;
        let contents = match (self.dataset, self.format) {
            (Dataset::Books, format) => books.list_books().await.and_then(|rows| render(&rows, format)),
            (Dataset::Authors, format) => authors.list_authors().await.and_then(|rows| render(&rows, format)),
        };
        self.busy = false;
        let result = contents.map(|contents| ExportFile {
            filename: format!("{}.{}", self.dataset.key(), self.format.extension()),
            mime: self.format.mime(),
            contents,
        });
        settle(&mut self.error, result)
    }
}

fn render<T>(rows: &[T], format: ExportFormat) -> Result<String, ClientError>
where
    T: crate::util::table::TableRow + serde::Serialize,
{
    match format {
        ExportFormat::Csv => to_csv(rows),
        ExportFormat::Json => to_json(rows),
    }
}

#[component]
pub fn ExportView() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(ExportPage::default());
    let last_file = RwSignal::new(None::<String>);

    let on_export = move |_| {
        if page.with_untracked(|p| p.busy) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let mut next = page.get_untracked();
            page.update(|p| p.busy = true);
            let catalog = services.config.catalog();
            leptos::task::spawn_local(async move {
                if let Ok(file) = next.build(&catalog, &catalog).await {
                    match crate::util::browser::download(&file) {
                        Ok(()) => last_file.set(Some(file.filename)),
                        Err(message) => next.error = Some(message),
                    }
                }
                page.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&services, last_file);
        }
    };

    view! {
        <section>
            <h1>"Export"</h1>
            <div class="form">
                <select on:change=move |ev| page.update(|p| p.dataset = Dataset::from_key(&event_target_value(&ev)))>
                    <option value=Dataset::Books.key() selected=move || page.with(|p| p.dataset == Dataset::Books)>
                        "Books"
                    </option>
                    <option value=Dataset::Authors.key() selected=move || page.with(|p| p.dataset == Dataset::Authors)>
                        "Authors"
                    </option>
                </select>
                <select on:change=move |ev| page.update(|p| p.format = ExportFormat::from_key(&event_target_value(&ev)))>
                    <option value=ExportFormat::Csv.key() selected=move || page.with(|p| p.format == ExportFormat::Csv)>
                        "CSV"
                    </option>
                    <option value=ExportFormat::Json.key() selected=move || page.with(|p| p.format == ExportFormat::Json)>
                        "JSON"
                    </option>
                </select>
                <button type="button" on:click=on_export disabled=move || page.with(|p| p.busy)>"Download"</button>
            </div>
            <p class="message">{move || last_file.get().map(|name| format!("Downloaded {name}"))}</p>
            <p class="message message--error">{move || page.with(|p| p.error.clone())}</p>
        </section>
    }
}
