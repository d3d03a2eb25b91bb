//! Typed clients for every external service the pages call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each service sits behind a trait (`BookRepository`, `FunctionsApi`,
//! `WeatherApi`, ...) so pages can be exercised against test doubles; the
//! structs here are the reqwest-backed implementations.

pub mod catalog;
pub mod functions;
pub mod geocode;
mod http;
pub mod types;
pub mod weather;
