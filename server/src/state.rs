//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only trait-object handles to the catalog and the mail transport;
//! handlers keep no per-request state between invocations.

use std::sync::Arc;

use crate::services::catalog::{AuthorStore, BookStore};
use crate::services::mail::MailTransport;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
    pub authors: Arc<dyn AuthorStore>,
    /// Optional mail transport. `None` if SMTP credentials are not configured.
    pub mailer: Option<Arc<dyn MailTransport>>,
}

impl AppState {
    #[must_use]
    pub fn new(books: Arc<dyn BookStore>, authors: Arc<dyn AuthorStore>, mailer: Option<Arc<dyn MailTransport>>) -> Self {
        Self { books, authors, mailer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
