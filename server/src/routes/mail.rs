//! `sendEmail`: validate a message payload and hand it to the mail transport.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::Json;
use client::net::types::{SendEmailRequest, SendEmailResponse};

use crate::error::{ApiError, parse_json_body};
use crate::services::mail::OutgoingMail;
use crate::state::AppState;

/// `POST /sendEmail`: send one message through a fresh transport session.
///
/// Any method other than `POST` is rejected with 405 before validation.
pub async fn send_email(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<SendEmailResponse>, ApiError> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let request: SendEmailRequest = parse_json_body(&body)?;
    let mail = OutgoingMail::try_from(request).map_err(|e| ApiError::Validation(e.to_string()))?;

    let Some(mailer) = &state.mailer else {
        tracing::error!("sendEmail called without SMTP credentials");
        return Err(ApiError::Upstream("mail transport not configured".into()));
    };

    let attachments = mail.attachments.len();
    match mailer.send(mail).await {
        Ok(message_id) => {
            tracing::info!(%message_id, attachments, "email sent");
            Ok(Json(SendEmailResponse::sent(message_id)))
        }
        Err(e) => {
            tracing::error!(error = %e, "error sending email");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "mail_test.rs"]
mod tests;
