//! Response decoding shared by the HTTP clients.

use serde::de::DeserializeOwned;

use super::types::ErrorResponse;
use crate::error::ClientError;

/// Join a base URL and an absolute path without doubling slashes.
pub(crate) fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Pull the message out of an `{"error": "..."}` body, or return the body as-is.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.trim().to_owned())
}

/// Decode a success body as `T`, or turn a failure status into [`ClientError::Status`].
pub(crate) async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message: if message.is_empty() { status.to_string() } else { message },
        });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

pub(crate) fn transport_error(err: reqwest::Error) -> ClientError {
    ClientError::Http(err.to_string())
}

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;
