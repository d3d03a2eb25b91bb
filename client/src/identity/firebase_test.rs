use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

#[tokio::test]
async fn sign_in_posts_password_and_maps_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .and(query_param("key", "fb"))
        .and(body_json(serde_json::json!({
            "email": "reader@example.com",
            "password": "secret1",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "localId": "abc",
            "email": "reader@example.com",
            "displayName": "",
            "idToken": "tok",
            "registered": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = FirebaseAuth::with_base_url(server.uri(), "fb")
        .sign_in("reader@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(user.uid, "abc");
    assert_eq!(user.email.as_deref(), Some("reader@example.com"));
    assert!(user.display_name.is_none());
    assert_eq!(user.id_token.as_deref(), Some("tok"));
}

#[tokio::test]
async fn register_uses_sign_up_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts:signUp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"localId": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    let user = FirebaseAuth::with_base_url(server.uri(), "fb")
        .register("new@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(user.uid, "new");
}

#[tokio::test]
async fn provider_error_code_becomes_friendly_auth_error() {
    let server = MockServer::start().await;
    Mock::given(path("/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 400, "message": "EMAIL_EXISTS", "errors": []}
        })))
        .mount(&server)
        .await;

    let err = FirebaseAuth::with_base_url(server.uri(), "fb")
        .register("taken@example.com", "secret1")
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::Auth("An account with this email already exists.".into()));
}

#[test]
fn friendly_messages_strip_detail_and_pass_unknown_codes() {
    assert_eq!(
        friendly_auth_message("WEAK_PASSWORD : Password should be at least 6 characters"),
        "Password must be at least 6 characters."
    );
    assert_eq!(friendly_auth_message("INVALID_LOGIN_CREDENTIALS"), "Incorrect email or password.");
    assert_eq!(friendly_auth_message("SOMETHING_NEW"), "SOMETHING_NEW");
}

#[tokio::test]
async fn sign_out_is_local() {
    let auth = FirebaseAuth::with_base_url("http://127.0.0.1:9", "fb");
    assert!(auth.sign_out().await.is_ok());
}
