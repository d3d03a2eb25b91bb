use super::*;

#[test]
fn join_normalizes_slashes() {
    assert_eq!(join("http://x/", "/countBooks"), "http://x/countBooks");
    assert_eq!(join("http://x", "api/books"), "http://x/api/books");
}

#[test]
fn error_message_extracts_error_field() {
    assert_eq!(error_message(r#"{"error":"Method not allowed"}"#), "Method not allowed");
}

#[test]
fn error_message_falls_back_to_raw_body() {
    assert_eq!(error_message("  upstream exploded \n"), "upstream exploded");
    assert_eq!(error_message(r#"{"cod":"404"}"#), r#"{"cod":"404"}"#);
}
