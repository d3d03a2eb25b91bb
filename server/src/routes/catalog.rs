//! Catalog routes: `countBooks` plus book/author collection endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{Author, Book, CountResponse};

use crate::error::{ApiError, parse_json_body};
use crate::state::AppState;

/// `ANY /countBooks`: current size of the book collection.
pub async fn count_books(State(state): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    let count = state.books.count().await.map_err(|e| {
        tracing::error!(error = %e, "error counting books");
        ApiError::from(e)
    })?;
    Ok(Json(CountResponse { count }))
}

/// `GET /api/books`: every book document.
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.books.list().await.map_err(|e| {
        tracing::error!(error = %e, "error listing books");
        ApiError::from(e)
    })?;
    Ok(Json(books))
}

/// `POST /api/books`: store a book. `isbn` and `name` are required.
pub async fn create_book(State(state): State<AppState>, body: Bytes) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book: Book = parse_json_body(&body)?;
    if book.isbn.trim().is_empty() || book.name.trim().is_empty() {
        return Err(ApiError::Validation("Missing required fields: isbn, name".into()));
    }

    let stored = state.books.insert(book).await.map_err(|e| {
        tracing::error!(error = %e, "error adding book");
        ApiError::from(e)
    })?;
    tracing::info!(id = stored.id.as_deref().unwrap_or_default(), "book added");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `GET /api/authors`: every author document.
pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>, ApiError> {
    let authors = state.authors.list().await.map_err(|e| {
        tracing::error!(error = %e, "error listing authors");
        ApiError::from(e)
    })?;
    Ok(Json(authors))
}

/// `POST /api/authors`: store an author. `name` is required.
pub async fn create_author(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let author: Author = parse_json_body(&body)?;
    if author.name.trim().is_empty() {
        return Err(ApiError::Validation("Missing required field: name".into()));
    }

    let stored = state.authors.insert(author).await.map_err(|e| {
        tracing::error!(error = %e, "error adding author");
        ApiError::from(e)
    })?;
    Ok((StatusCode::CREATED, Json(stored)))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
