use super::*;
use crate::pages::test_doubles::StubFunctions;

fn filled() -> SendEmailPage {
    SendEmailPage {
        to: " a@b.com, c@d.com ".into(),
        subject: "hi".into(),
        text: "hello".into(),
        ..SendEmailPage::default()
    }
}

#[test]
fn request_omits_blank_fields() {
    let request = filled().to_request().unwrap();
    assert_eq!(request.to.as_deref(), Some("a@b.com, c@d.com"));
    assert_eq!(request.text.as_deref(), Some("hello"));
    assert!(request.html.is_none());
    assert!(request.attachments.is_none());
}

#[test]
fn missing_body_uses_server_message() {
    let page = SendEmailPage { text: "   ".into(), ..filled() };
    assert_eq!(page.to_request().unwrap_err(), ClientError::Validation(MISSING_FIELDS_MESSAGE.into()));
}

#[test]
fn html_alone_is_enough() {
    let page = SendEmailPage { text: String::new(), html: "<p>hi</p>".into(), ..filled() };
    assert!(page.to_request().is_ok());
}

#[test]
fn bad_recipient_is_rejected() {
    let page = SendEmailPage { to: "a@b.com, bob".into(), ..filled() };
    assert!(matches!(page.to_request(), Err(ClientError::Validation(_))));
}

#[test]
fn attach_encodes_base64() {
    let mut page = filled();
    page.attach("notes.txt", b"hello world");
    assert_eq!(page.attachments[0].content, "aGVsbG8gd29ybGQ=");
    assert_eq!(page.attachments[0].encoding.as_deref(), Some("base64"));
    assert_eq!(page.to_request().unwrap().attachments.map(|a| a.len()), Some(1));

    page.remove_attachment(5);
    page.remove_attachment(0);
    assert!(page.attachments.is_empty());
}

#[tokio::test]
async fn submit_sends_and_resets_form() {
    let functions = StubFunctions::default();
    let mut page = filled();
    let response = page.submit(&functions).await.unwrap();
    assert!(response.success);
    assert_eq!(response.message, "Email sent successfully");
    assert_eq!(functions.sent.lock().unwrap().len(), 1);
    assert!(page.to.is_empty());
    assert_eq!(page.sent.as_ref().map(|s| s.message_id.as_str()), Some("<stub-1@bookshelf.test>"));
}

#[tokio::test]
async fn invalid_form_is_not_sent() {
    let functions = StubFunctions::default();
    let mut page = SendEmailPage::default();
    assert!(page.submit(&functions).await.is_err());
    assert!(functions.sent.lock().unwrap().is_empty());
    assert_eq!(page.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
}
