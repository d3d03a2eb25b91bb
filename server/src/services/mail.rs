//! Outbound mail: request validation, MIME assembly and SMTP relay.
//!
//! DESIGN
//! ======
//! `sendEmail` validates presence only; everything else (address syntax,
//! attachment encoding, relay auth) is a send-time failure reported with the
//! underlying message. [`SmtpMailer`] opens a fresh relay session per message
//! and never pools connections.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use client::net::types::{EmailAttachment, MISSING_FIELDS_MESSAGE, SendEmailRequest};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Mailboxes, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;
/// The submissions port that speaks TLS from the first byte.
pub const IMPLICIT_TLS_PORT: u16 = 465;

// =============================================================================
// CONFIG
// =============================================================================

/// SMTP relay settings loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Relay login; also used as the `From` address.
    pub user: String,
    pub password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl MailConfig {
    /// Load from `EMAIL_USER`, `EMAIL_PASSWORD`, `SMTP_HOST`, `SMTP_PORT`.
    /// Returns `None` if credentials are missing (mail will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let user = get("EMAIL_USER").filter(|v| !v.trim().is_empty())?;
        let password = get("EMAIL_PASSWORD").filter(|v| !v.is_empty())?;
        let smtp_host = get("SMTP_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned());
        let smtp_port = get("SMTP_PORT")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);
        Some(Self { user, password, smtp_host, smtp_port })
    }

    #[must_use]
    pub fn security(&self) -> SmtpSecurity {
        SmtpSecurity::for_port(self.smtp_port)
    }
}

/// How the relay session is encrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// TLS handshake before any SMTP traffic (port 465).
    ImplicitTls,
    /// Plain connect, then upgrade with `STARTTLS` (587, 25, and the rest).
    StartTls,
}

impl SmtpSecurity {
    #[must_use]
    pub fn for_port(port: u16) -> Self {
        if port == IMPLICIT_TLS_PORT { Self::ImplicitTls } else { Self::StartTls }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Send-time failures. Display is the underlying message, unprefixed, since
/// the handler returns it to the caller verbatim.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("{0}")]
    Address(String),
    #[error("{0}")]
    Attachment(String),
    #[error("{0}")]
    Build(String),
    #[error("{0}")]
    Transport(String),
}

/// A `sendEmail` payload lacking `to`, `subject`, or a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", MISSING_FIELDS_MESSAGE)]
pub struct MissingFields;

// =============================================================================
// OUTGOING MAIL
// =============================================================================

/// A request that passed presence validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
    /// Still base64; decoded when the message is built.
    pub attachments: Vec<EmailAttachment>,
}

impl TryFrom<SendEmailRequest> for OutgoingMail {
    type Error = MissingFields;

    fn try_from(request: SendEmailRequest) -> Result<Self, Self::Error> {
        if !request.has_required_fields() {
            return Err(MissingFields);
        }
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Ok(Self {
            to: request.to.unwrap_or_default(),
            subject: request.subject.unwrap_or_default(),
            text: non_empty(request.text),
            html: non_empty(request.html),
            attachments: request.attachments.unwrap_or_default(),
        })
    }
}

/// Generate an RFC 5322 message id scoped to the sender's domain.
#[must_use]
pub fn new_message_id(from: &str) -> String {
    let domain = from
        .rsplit_once('@')
        .map(|(_, d)| d.trim_end_matches('>'))
        .filter(|d| !d.is_empty())
        .unwrap_or("localhost");
    format!("<{}@{domain}>", Uuid::new_v4())
}

/// Guess a MIME type from the attachment's extension.
fn attachment_content_type(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Decode one inline attachment into a MIME part.
pub(crate) fn attachment_part(attachment: &EmailAttachment) -> Result<SinglePart, MailError> {
    let filename = if attachment.filename.is_empty() { "attachment".to_owned() } else { attachment.filename.clone() };
    if attachment.content.trim().is_empty() {
        return Err(MailError::Attachment(format!("attachment {filename}: missing content")));
    }
    let cleaned: String = attachment
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = BASE64
        .decode(cleaned)
        .map_err(|e| MailError::Attachment(format!("attachment {filename}: {e}")))?;
    let content_type = ContentType::parse(attachment_content_type(&filename))
        .map_err(|e| MailError::Attachment(e.to_string()))?;
    Ok(Attachment::new(filename).body(bytes, content_type))
}

/// Assemble the MIME message. HTML falls back to the plain text when absent.
///
/// # Errors
///
/// Returns [`MailError::Address`] for unparseable addresses,
/// [`MailError::Attachment`] for bad attachment content, and
/// [`MailError::Build`] if lettre rejects the message.
pub fn build_message(from: &str, mail: &OutgoingMail, message_id: &str) -> Result<Message, MailError> {
    let from = from
        .parse::<Mailbox>()
        .map_err(|e| MailError::Address(e.to_string()))?;
    let recipients = mail
        .to
        .parse::<Mailboxes>()
        .map_err(|e| MailError::Address(e.to_string()))?;

    let mut builder = Message::builder()
        .from(from)
        .subject(mail.subject.clone())
        .message_id(Some(message_id.to_owned()));
    for recipient in recipients {
        builder = builder.to(recipient);
    }

    let html = mail
        .html
        .clone()
        .or_else(|| mail.text.clone())
        .unwrap_or_default();
    let body = match &mail.text {
        Some(text) => MultiPart::alternative_plain_html(text.clone(), html),
        None => MultiPart::alternative().singlepart(SinglePart::html(html)),
    };

    let body = if mail.attachments.is_empty() {
        body
    } else {
        let mut mixed = MultiPart::mixed().multipart(body);
        for attachment in &mail.attachments {
            mixed = mixed.singlepart(attachment_part(attachment)?);
        }
        mixed
    };

    builder
        .multipart(body)
        .map_err(|e| MailError::Build(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Delivers one message and returns its message id. Enables mocking in tests.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<String, MailError>;
}

/// SMTP relay transport. Credentials come from [`MailConfig`].
pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    #[must_use]
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let host = &self.config.smtp_host;
        let builder = match self.config.security() {
            SmtpSecurity::ImplicitTls => AsyncSmtpTransport::<Tokio1Executor>::relay(host),
            SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host),
        };
        let transport = builder
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(self.config.user.clone(), self.config.password.clone()))
            .build();
        Ok(transport)
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<String, MailError> {
        let message_id = new_message_id(&self.config.user);
        let message = build_message(&self.config.user, &mail, &message_id)?;

        self.transport()?
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(message_id)
    }
}

#[cfg(test)]
#[path = "mail_test.rs"]
mod tests;
