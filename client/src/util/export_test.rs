use super::*;
use crate::net::types::{Author, Book};

#[test]
fn csv_has_header_and_crlf_rows() {
    let books = vec![Book { isbn: "9780441013593".into(), name: "Dune".into(), ..Book::default() }];
    assert_eq!(to_csv(&books).unwrap(), "isbn,name\r\n9780441013593,Dune\r\n");
}

#[test]
fn csv_quotes_commas_quotes_and_newlines() {
    let books = vec![
        Book { isbn: "1".into(), name: "Pride, and Prejudice".into(), ..Book::default() },
        Book { isbn: "2".into(), name: "The \"Hobbit\"".into(), ..Book::default() },
        Book { isbn: "3".into(), name: "Two\nLines".into(), ..Book::default() },
    ];
    let csv = to_csv(&books).unwrap();
    assert!(csv.contains("1,\"Pride, and Prejudice\"\r\n"));
    assert!(csv.contains("2,\"The \"\"Hobbit\"\"\"\r\n"));
    assert!(csv.contains("3,\"Two\nLines\"\r\n"));
}

#[test]
fn csv_of_empty_collection_is_header_only() {
    assert_eq!(to_csv::<Author>(&[]).unwrap(), "name,nationality,birth_year\r\n");
}

#[test]
fn json_export_keeps_ids() {
    let authors = vec![Author { id: Some("a1".into()), name: "Lem".into(), ..Author::default() }];
    let json: serde_json::Value = serde_json::from_str(&to_json(&authors).unwrap()).unwrap();
    assert_eq!(json[0]["id"], "a1");
    assert_eq!(json[0]["name"], "Lem");
}
