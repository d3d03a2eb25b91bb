//! Firebase Auth over its REST API (identitytoolkit v1).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::IdentityProvider;
use crate::error::ClientError;
use crate::net::types::User;

pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Clone, Debug)]
pub struct FirebaseAuth {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl From<AccountResponse> for User {
    fn from(resp: AccountResponse) -> Self {
        Self {
            uid: resp.local_id,
            email: resp.email,
            display_name: resp.display_name.filter(|n| !n.is_empty()),
            id_token: resp.id_token,
        }
    }
}

/// Turn a provider error code (`WEAK_PASSWORD : detail`) into a user-facing message.
#[must_use]
pub fn friendly_auth_message(code: &str) -> String {
    let key = code.split(':').next().unwrap_or_default().trim();
    let text = match key {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => "Incorrect email or password.",
        "USER_DISABLED" => "This account has been disabled.",
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "INVALID_EMAIL" => "Enter a valid email address.",
        "WEAK_PASSWORD" => "Password must be at least 6 characters.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later.",
        "OPERATION_NOT_ALLOWED" => "Email sign-in is not enabled.",
        _ => return code.to_owned(),
    };
    text.to_owned()
}

impl FirebaseAuth {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_IDENTITY_URL, api_key)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into(), api_key: api_key.into() }
    }

    async fn password_call(&self, method: &str, email: &str, password: &str) -> Result<User, ClientError> {
        let url = format!("{}/accounts:{method}", self.base_url.trim_end_matches('/'));
        let resp = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&PasswordRequest { email, password, return_secure_token: true })
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;
        if !status.is_success() {
            let code = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::warn!(%code, method, "identity provider rejected request");
            return Err(ClientError::Auth(friendly_auth_message(&code)));
        }
        serde_json::from_str::<AccountResponse>(&body)
            .map(User::from)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ClientError> {
        self.password_call("signInWithPassword", email, password)
            .await
    }

    async fn register(&self, email: &str, password: &str) -> Result<User, ClientError> {
        self.password_call("signUp", email, password).await
    }

    /// Sessions are held client-side; dropping the token is all sign-out needs.
    async fn sign_out(&self) -> Result<(), ClientError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;
