use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

#[tokio::test]
async fn list_books_decodes_documents() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "1", "isbn": "9780441013593", "name": "Dune"},
            {"id": "2", "isbn": 9780060512750_u64, "name": "The Left Hand of Darkness"}
        ])))
        .mount(&server)
        .await;

    let books = CatalogClient::new(server.uri()).list_books().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[1].isbn, "9780060512750");
}

#[tokio::test]
async fn add_book_posts_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .and(body_json(serde_json::json!({"isbn": "1", "name": "A"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "new", "isbn": "1", "name": "A"})))
        .expect(1)
        .mount(&server)
        .await;

    let book = Book { isbn: "1".into(), name: "A".into(), ..Book::default() };
    let stored = CatalogClient::new(server.uri()).add_book(&book).await.unwrap();
    assert_eq!(stored.id.as_deref(), Some("new"));
}

#[tokio::test]
async fn list_authors_surfaces_error_body() {
    let server = MockServer::start().await;
    Mock::given(path("/api/authors"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "pool timed out"})))
        .mount(&server)
        .await;

    let err = CatalogClient::new(server.uri()).list_authors().await.unwrap_err();
    assert_eq!(err.to_string(), "pool timed out");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(path("/api/authors"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = CatalogClient::new(server.uri()).list_authors().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
