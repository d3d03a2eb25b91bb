//! Catalog store for book and author documents.
//!
//! DESIGN
//! ======
//! Handlers see the catalog only through [`BookStore`] and [`AuthorStore`] so
//! tests can swap in in-memory doubles. `PgCatalog` keeps each document as a
//! `jsonb` payload keyed by UUID; the id lives in the row, never in the
//! payload.

use async_trait::async_trait;
use client::net::types::{Author, Book};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("malformed document {id}: {message}")]
    Decode { id: String, message: String },
    #[error("unserializable document: {0}")]
    Encode(String),
}

/// Read/write access to the `books` collection.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Current number of documents in the collection.
    async fn count(&self) -> Result<u64, StoreError>;
    async fn list(&self) -> Result<Vec<Book>, StoreError>;
    /// Store a new document and return it with its assigned id.
    async fn insert(&self, book: Book) -> Result<Book, StoreError>;
}

/// Read/write access to the `authors` collection.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Author>, StoreError>;
    async fn insert(&self, author: Author) -> Result<Author, StoreError>;
}

// =============================================================================
// DOCUMENT ENCODING
// =============================================================================

/// Serialize a document for storage, dropping any client-supplied `id`.
pub(crate) fn encode_document<T: Serialize>(doc: &T) -> Result<serde_json::Value, StoreError> {
    let mut value = serde_json::to_value(doc).map_err(|e| StoreError::Encode(e.to_string()))?;
    if let Some(obj) = value.as_object_mut() {
        obj.remove("id");
    }
    Ok(value)
}

/// Rebuild a document from its row id and stored payload.
pub(crate) fn decode_document<T: DeserializeOwned>(id: Uuid, mut data: serde_json::Value) -> Result<T, StoreError> {
    let id = id.to_string();
    match data.as_object_mut() {
        Some(obj) => {
            obj.insert("id".to_owned(), serde_json::Value::String(id.clone()));
        }
        None => return Err(StoreError::Decode { id, message: "payload is not an object".into() }),
    }
    serde_json::from_value(data).map_err(|e| StoreError::Decode { id, message: e.to_string() })
}

// =============================================================================
// POSTGRES
// =============================================================================

/// Postgres-backed catalog. One table per collection.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_documents<T: DeserializeOwned>(&self, sql: &str) -> Result<Vec<T>, StoreError> {
        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|row| decode_document(row.get("id"), row.get("data")))
            .collect()
    }

    async fn insert_document<T>(&self, sql: &str, doc: &T) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let id = Uuid::new_v4();
        let data = encode_document(doc)?;
        sqlx::query(sql)
            .bind(id)
            .bind(&data)
            .execute(&self.pool)
            .await?;
        decode_document(id, data)
    }
}

#[async_trait]
impl BookStore for PgCatalog {
    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.list_documents("SELECT id, data FROM books ORDER BY created_at, id")
            .await
    }

    async fn insert(&self, book: Book) -> Result<Book, StoreError> {
        self.insert_document("INSERT INTO books (id, data) VALUES ($1, $2)", &book)
            .await
    }
}

#[async_trait]
impl AuthorStore for PgCatalog {
    async fn list(&self) -> Result<Vec<Author>, StoreError> {
        self.list_documents("SELECT id, data FROM authors ORDER BY created_at, id")
            .await
    }

    async fn insert(&self, author: Author) -> Result<Author, StoreError> {
        self.insert_document("INSERT INTO authors (id, data) VALUES ($1, $2)", &author)
            .await
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
