use super::*;

#[test]
fn book_accepts_numeric_isbn() {
    let book: Book = serde_json::from_str(r#"{"isbn": 9780143127550, "name": "Dune"}"#).unwrap();
    assert_eq!(book.isbn, "9780143127550");
    assert_eq!(book.name, "Dune");
    assert!(book.id.is_none());
}

#[test]
fn book_keeps_unmodelled_fields() {
    let book: Book = serde_json::from_str(r#"{"id":"b1","isbn":"1","name":"A","genre":"scifi"}"#).unwrap();
    assert_eq!(book.id.as_deref(), Some("b1"));
    assert_eq!(book.extra.get("genre").and_then(|v| v.as_str()), Some("scifi"));

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["genre"], "scifi");
}

#[test]
fn book_rejects_structured_isbn() {
    let result = serde_json::from_str::<Book>(r#"{"isbn": {"a": 1}}"#);
    assert!(result.is_err());
}

#[test]
fn book_without_id_omits_it_on_the_wire() {
    let book = Book { isbn: "1".into(), name: "A".into(), ..Book::default() };
    let json = serde_json::to_value(&book).unwrap();
    assert!(json.get("id").is_none());
}

#[test]
fn author_optional_fields_default() {
    let author: Author = serde_json::from_str(r#"{"name":"Le Guin"}"#).unwrap();
    assert_eq!(author.name, "Le Guin");
    assert!(author.nationality.is_none());
    assert!(author.birth_year.is_none());
}

#[test]
fn send_email_request_requires_to_subject_and_body() {
    let full = SendEmailRequest {
        to: Some("a@b.com".into()),
        subject: Some("hi".into()),
        text: Some("hello".into()),
        ..SendEmailRequest::default()
    };
    assert!(full.has_required_fields());

    let html_only = SendEmailRequest { text: None, html: Some("<p>hi</p>".into()), ..full.clone() };
    assert!(html_only.has_required_fields());

    assert!(!SendEmailRequest::default().has_required_fields());
    assert!(!SendEmailRequest { to: None, ..full.clone() }.has_required_fields());
    assert!(!SendEmailRequest { subject: None, ..full.clone() }.has_required_fields());
    assert!(!SendEmailRequest { text: None, html: None, ..full.clone() }.has_required_fields());
}

#[test]
fn empty_strings_count_as_missing() {
    let request = SendEmailRequest {
        to: Some(String::new()),
        subject: Some("hi".into()),
        text: Some("hello".into()),
        ..SendEmailRequest::default()
    };
    assert!(!request.has_required_fields());

    let blank_body = SendEmailRequest {
        to: Some("a@b.com".into()),
        subject: Some("hi".into()),
        text: Some(String::new()),
        html: Some(String::new()),
        attachments: None,
    };
    assert!(!blank_body.has_required_fields());
}

#[test]
fn send_email_response_uses_camel_case_message_id() {
    let json = serde_json::to_value(SendEmailResponse::sent("<id@x>".into())).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["messageId"], "<id@x>");
    assert_eq!(json["message"], EMAIL_SENT_MESSAGE);
}

#[test]
fn send_email_request_parses_attachments() {
    let request: SendEmailRequest = serde_json::from_str(
        r#"{"to":"a@b.com","subject":"s","text":"t","attachments":[{"filename":"a.txt","content":"aGk=","encoding":"base64"}]}"#,
    )
    .unwrap();
    let attachments = request.attachments.unwrap();
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0].filename, "a.txt");
    assert_eq!(attachments[0].encoding.as_deref(), Some("base64"));
}

#[test]
fn attachment_without_content_still_parses() {
    let request: SendEmailRequest =
        serde_json::from_str(r#"{"to":"a@b.com","subject":"s","text":"t","attachments":[{"filename":"a.txt"}]}"#).unwrap();
    let attachments = request.attachments.unwrap();
    assert_eq!(attachments[0].filename, "a.txt");
    assert!(attachments[0].content.is_empty());
    assert!(attachments[0].encoding.is_none());
}
