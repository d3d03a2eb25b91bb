//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each module pairs a view model with the `#[component]` that renders it.
//! The model owns form state, validates input, and makes at most one call
//! through a data-access trait; the component keeps the model in an
//! `RwSignal` and runs that call in the browser. Pages never call each
//! other; routing between them is `app`'s job.

pub mod add_book;
pub mod book_count;
pub mod count_api;
pub mod export;
pub mod home;
pub mod map;
pub mod register;
pub mod send_email;
pub mod signin;
pub mod tables;
pub mod weather;

#[cfg(test)]
pub(crate) mod test_doubles;

use crate::error::ClientError;

/// Where the auth pages send the user after success.
pub const AFTER_AUTH_PATH: &str = "/";

/// Mirror an action's outcome into a page's `error` slot.
pub(crate) fn settle<T>(error: &mut Option<String>, result: Result<T, ClientError>) -> Result<T, ClientError> {
    match &result {
        Ok(_) => *error = None,
        Err(e) => {
            tracing::warn!(error = %e, "page action failed");
            *error = Some(e.to_string());
        }
    }
    result
}
