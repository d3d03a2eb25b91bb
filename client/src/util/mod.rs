//! Utility helpers shared across pages and views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `validate`, `table`, and `export` are pure functions over form and table
//! state. `auth` holds the route guard effect, `session` the persisted user,
//! and `browser` the hydrate-only DOM glue.

pub mod auth;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod export;
pub mod session;
pub mod table;
pub mod validate;
