//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome shared by every route: the navigation bar and the auth wrapper
//! around protected pages. Both read the identity signal from context.

pub mod nav_bar;
pub mod require_auth;
