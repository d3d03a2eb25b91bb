//! Signed-in user persisted in `localStorage` across reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Firebase REST provider keeps no session of its own, so the browser
//! app stores the last signed-in user here and hands it to
//! `Identity::restore` on startup. Outside the browser both calls are no-ops.

use crate::net::types::User;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub const SESSION_KEY: &str = "bookshelf.user";

/// The user saved by the previous visit, if any.
pub fn load_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save `user`, or clear the entry when signed out.
pub fn save_user(user: Option<&User>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = match user.map(serde_json::to_string) {
            Some(Ok(raw)) => storage.set_item(SESSION_KEY, &raw),
            Some(Err(_)) | None => storage.remove_item(SESSION_KEY),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}
