//! Client-side filtering, sorting, and paging for the catalog tables.
//!
//! DESIGN
//! ======
//! Tables load whole collections and slice them locally. A row exposes its
//! cells as display strings through [`TableRow`]; sorting compares cells
//! numerically when both parse as numbers, case-insensitively when neither
//! does, and places numbers ahead of text in mixed columns.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use crate::net::types::{Author, Book};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A record that can be shown as a table row.
pub trait TableRow {
    /// Column keys, in display order.
    fn columns() -> &'static [&'static str];
    /// Display value of one column; unknown columns are empty.
    fn cell(&self, column: &str) -> String;
}

impl TableRow for Book {
    fn columns() -> &'static [&'static str] {
        &["isbn", "name"]
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "id" => self.id.clone().unwrap_or_default(),
            "isbn" => self.isbn.clone(),
            "name" => self.name.clone(),
            other => extra_cell(&self.extra, other),
        }
    }
}

impl TableRow for Author {
    fn columns() -> &'static [&'static str] {
        &["name", "nationality", "birth_year"]
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "id" => self.id.clone().unwrap_or_default(),
            "name" => self.name.clone(),
            "nationality" => self.nationality.clone().unwrap_or_default(),
            "birth_year" => self.birth_year.map(|y| y.to_string()).unwrap_or_default(),
            other => extra_cell(&self.extra, other),
        }
    }
}

fn extra_cell(extra: &serde_json::Map<String, serde_json::Value>, column: &str) -> String {
    match extra.get(column) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub descending: bool,
}

/// Filter, sort, and page selection for one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    /// Case-insensitive substring matched against every column.
    pub filter: String,
    pub sort: Option<SortSpec>,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self { filter: String::new(), sort: None, page: 0, page_size: DEFAULT_PAGE_SIZE }
    }
}

/// One page of filtered, sorted rows.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePage<T> {
    pub rows: Vec<T>,
    /// Rows matching the filter, across all pages.
    pub total: usize,
    /// Page actually returned, after clamping.
    pub page: usize,
    pub page_count: usize,
}

impl TableQuery {
    /// Toggle sorting on `column`: ascending first, then descending.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(spec) if spec.column == column => Some(SortSpec { column: spec.column, descending: !spec.descending }),
            _ => Some(SortSpec { column: column.to_owned(), descending: false }),
        };
        self.page = 0;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 0;
    }

    #[must_use]
    pub fn apply<T: TableRow + Clone>(&self, rows: &[T]) -> TablePage<T> {
        let needle = self.filter.trim().to_lowercase();
        let mut matched: Vec<&T> = rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || T::columns()
                        .iter()
                        .any(|c| row.cell(c).to_lowercase().contains(&needle))
            })
            .collect();

        if let Some(spec) = &self.sort {
            matched.sort_by(|a, b| {
                let ord = compare_cells(&a.cell(&spec.column), &b.cell(&spec.column));
                if spec.descending { ord.reverse() } else { ord }
            });
        }

        let total = matched.len();
        let page_size = self.page_size.max(1);
        let page_count = total.div_ceil(page_size).max(1);
        let page = self.page.min(page_count - 1);
        let rows = matched
            .into_iter()
            .skip(page * page_size)
            .take(page_size)
            .cloned()
            .collect();
        TablePage { rows, total, page, page_count }
    }
}

/// Numbers sort before text so mixed columns still form a total order.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
