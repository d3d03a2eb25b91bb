//! Client-side error type shared by every external call.

/// Failures from identity, catalog, function, weather, and geocoding calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// A required key or URL is not configured.
    #[error("missing configuration: {0}")]
    Config(&'static str),

    #[error("invalid url: {0}")]
    Url(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The identity provider rejected the credentials.
    #[error("{0}")]
    Auth(String),
}
