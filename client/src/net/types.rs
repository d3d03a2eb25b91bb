//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The functions server depends on this crate for these types so both sides
//! agree on field names. Catalog documents are schemaless upstream, so the
//! known fields are typed and everything else rides along in `extra`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Validation error returned by `sendEmail` when required fields are missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: to, subject, and text/html";
/// Success message returned alongside the message id by `sendEmail`.
pub const EMAIL_SENT_MESSAGE: &str = "Email sent successfully";

// =============================================================================
// IDENTITY
// =============================================================================

/// Signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user id.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Provider ID token, when the provider issued one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

// =============================================================================
// CATALOG DOCUMENTS
// =============================================================================

/// A book document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub isbn: String,
    #[serde(default)]
    pub name: String,
    /// Fields the catalog does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An author document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Older documents store ISBNs as numbers; accept either.
fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

// =============================================================================
// FUNCTIONS
// =============================================================================

/// `countBooks` response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// `sendEmail` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<EmailAttachment>>,
}

impl SendEmailRequest {
    /// `to`, `subject`, and one of `text`/`html` are present and non-empty.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        present(self.to.as_ref()) && present(self.subject.as_ref()) && (present(self.text.as_ref()) || present(self.html.as_ref()))
    }
}

fn present(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Attachment carried inline in a `sendEmail` request. `content` is base64.
/// Missing fields parse as empty; the mailer rejects empty content at send time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAttachment {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// `sendEmail` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(rename = "messageId")]
    pub message_id: String,
    pub message: String,
}

impl SendEmailResponse {
    #[must_use]
    pub fn sent(message_id: String) -> Self {
        Self { success: true, message_id, message: EMAIL_SENT_MESSAGE.to_owned() }
    }
}

/// Error body shared by all endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
