//! Handler-boundary error taxonomy.
//!
//! Every failure leaves a handler as `{"error": "<message>"}` with one of three
//! statuses. Service errors keep their own types and collapse into
//! [`ApiError::Upstream`] here, message intact.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::ErrorResponse;

use crate::services::catalog::StoreError;
use crate::services::mail::MailError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request payload is missing required fields or is not JSON.
    #[error("{0}")]
    Validation(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Store, transport, or configuration failure behind the handler.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<MailError> for ApiError {
    fn from(err: MailError) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// Parse a JSON request body. An empty body parses as `T::default()`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the body is not valid JSON for `T`.
pub fn parse_json_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Validation(format!("Invalid JSON body: {e}")))
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
