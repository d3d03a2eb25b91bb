//! Client for the two HTTP functions: `countBooks` and `sendEmail`.

use async_trait::async_trait;

use super::http::{decode, join, transport_error};
use super::types::{CountResponse, SendEmailRequest, SendEmailResponse};
use crate::error::ClientError;

/// The functions server as seen by pages.
#[async_trait]
pub trait FunctionsApi: Send + Sync {
    /// Size of the book collection, counted server-side.
    async fn count_books(&self) -> Result<u64, ClientError>;
    async fn send_email(&self, request: &SendEmailRequest) -> Result<SendEmailResponse, ClientError>;
}

/// reqwest-backed [`FunctionsApi`].
#[derive(Clone, Debug)]
pub struct FunctionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl FunctionsClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }
}

#[async_trait]
impl FunctionsApi for FunctionsClient {
    async fn count_books(&self) -> Result<u64, ClientError> {
        let resp = self
            .http
            .get(join(&self.base_url, "/countBooks"))
            .send()
            .await
            .map_err(transport_error)?;
        let body: CountResponse = decode(resp).await?;
        Ok(body.count)
    }

    async fn send_email(&self, request: &SendEmailRequest) -> Result<SendEmailResponse, ClientError> {
        let resp = self
            .http
            .post(join(&self.base_url, "/sendEmail"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        decode(resp).await
    }
}

#[cfg(test)]
#[path = "functions_test.rs"]
mod functions_test;
