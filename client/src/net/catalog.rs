//! Book and author repositories.
//!
//! DESIGN
//! ======
//! Pages never build catalog URLs themselves; they take a `&dyn BookRepository`
//! or `&dyn AuthorRepository`. `CatalogClient` implements both against the
//! functions server's `/api/books` and `/api/authors` collections.

use async_trait::async_trait;

use super::http::{decode, join, transport_error};
use super::types::{Author, Book};
use crate::error::ClientError;

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list_books(&self) -> Result<Vec<Book>, ClientError>;
    /// Store a book and return it with its assigned id.
    async fn add_book(&self, book: &Book) -> Result<Book, ClientError>;
}

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn list_authors(&self) -> Result<Vec<Author>, ClientError>;
    async fn add_author(&self, author: &Author) -> Result<Author, ClientError>;
}

/// reqwest-backed catalog repositories.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(join(&self.base_url, path))
            .send()
            .await
            .map_err(transport_error)?;
        decode(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let resp = self
            .http
            .post(join(&self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(resp).await
    }
}

#[async_trait]
impl BookRepository for CatalogClient {
    async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        self.get_json("/api/books").await
    }

    async fn add_book(&self, book: &Book) -> Result<Book, ClientError> {
        self.post_json("/api/books", book).await
    }
}

#[async_trait]
impl AuthorRepository for CatalogClient {
    async fn list_authors(&self) -> Result<Vec<Author>, ClientError> {
        self.get_json("/api/authors").await
    }

    async fn add_author(&self, author: &Author) -> Result<Author, ClientError> {
        self.post_json("/api/authors", author).await
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
