//! Shared types for the climate observation API
//!
//! Contains the request/response contract of the HTTP surface and the
//! ambient pieces (errors, logging) used by every binary in the workspace.
//! Storage row types live with the store in the webserver crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
