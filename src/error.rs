//! Error types for inkboard.
//!
//! Only three things are allowed to fail a run: configuration, frame
//! delivery, and page-index persistence. Entity reads and derivations
//! degrade in place instead of erroring (see [`crate::client`] and
//! [`crate::views`]).

use thiserror::Error;

/// Errors that can surface from a render invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is missing or invalid (e.g. `HA_URL` not set)
    #[error("configuration error: {0}")]
    Config(String),

    /// The display sink rejected or failed to deliver the finished frame
    #[error("frame delivery failed: {0}")]
    Sink(String),

    /// The page index could not be written back
    #[error("failed to persist page index: {0}")]
    PageState(String),
}
