//! Identity provider seam and the client-wide identity signal.
//!
//! DESIGN
//! ======
//! [`Identity`] is the single writer of the current [`AuthStatus`]. Pages and
//! the router hold `watch` receivers; nothing reads a global user. The signal
//! starts as `Unknown` and only the provider (via `restore`, sign-in, or
//! sign-out) moves it to a known state.

pub mod firebase;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::ClientError;
use crate::net::types::User;
use crate::state::auth::AuthStatus;

/// Email/password identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ClientError>;
    /// Create an account and sign it in.
    async fn register(&self, email: &str, password: &str) -> Result<User, ClientError>;
    async fn sign_out(&self) -> Result<(), ClientError>;
}

/// Provider handle plus the identity signal it drives.
pub struct Identity {
    provider: Arc<dyn IdentityProvider>,
    status: watch::Sender<AuthStatus>,
}

impl Identity {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (status, _) = watch::channel(AuthStatus::Unknown);
        Self { provider, status }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status.subscribe()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status.borrow().clone()
    }

    /// Publish the provider's persisted session (or its absence) at startup.
    pub fn restore(&self, user: Option<User>) {
        self.publish(AuthStatus::from(user));
    }

    /// # Errors
    ///
    /// Returns the provider's error; the published status is left unchanged.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let user = self.provider.sign_in(email, password).await?;
        self.publish(AuthStatus::Authenticated(user.clone()));
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns the provider's error; the published status is left unchanged.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let user = self.provider.register(email, password).await?;
        self.publish(AuthStatus::Authenticated(user.clone()));
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns the provider's error; the published status is left unchanged.
    pub async fn sign_out(&self) -> Result<(), ClientError> {
        self.provider.sign_out().await?;
        self.publish(AuthStatus::Unauthenticated);
        Ok(())
    }

    fn publish(&self, next: AuthStatus) {
        match next.user() {
            Some(user) => tracing::info!(uid = %user.uid, "identity: signed in"),
            None => tracing::info!("identity: signed out"),
        }
        self.status.send_replace(next);
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;
