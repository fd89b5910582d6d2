//! # Errors
//!
//! Error types shared by the controller and the fetcher boundary. Fetch
//! errors are held in controller state and handed to failure handlers, so
//! they clone cheaply and carry owned strings rather than boxed sources.

/// Errors surfaced by a single-record fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("record not found: {resource}/{id}")]
    NotFound { resource: String, id: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("record store closed")]
    StoreClosed,
}

/// Errors raised while constructing a controller.
///
/// Expected runtime conditions (missing id, failed fetch) never surface
/// here; they flow through the result aggregate instead.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("no resource name supplied and no ambient resource in context")]
    NoResource,
}
