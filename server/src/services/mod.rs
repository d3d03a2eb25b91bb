//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own storage and delivery concerns behind traits so route
//! handlers stay focused on protocol translation and status mapping.

pub mod catalog;
pub mod mail;
