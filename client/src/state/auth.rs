//! Identity state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`crate::identity::Identity`] publishes this on a `watch` channel; the app
//! mirrors each push into an `RwSignal` context that the route guard and the
//! views read. The provider has not reported anything until the first push,
//! so "no user" and "not known yet" are distinct states.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Three-valued authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// The provider has not reported yet.
    #[default]
    Unknown,
    Authenticated(User),
    Unauthenticated,
}

impl AuthStatus {
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// A provider push: `Some(user)` signs in, `None` signs out.
impl From<Option<User>> for AuthStatus {
    fn from(user: Option<User>) -> Self {
        user.map_or(Self::Unauthenticated, Self::Authenticated)
    }
}
