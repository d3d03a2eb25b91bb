//! Client-side state shared across pages.

pub mod auth;
