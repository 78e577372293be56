//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network, server, or deserialization failure on a group or schedule fetch.
    #[error("schedule service error: {0}")]
    Remote(String),

    /// A requested group name has no match in the loaded list.
    /// Callers fall back to a default; never fatal.
    #[error("group not found: {0}")]
    NotFound(String),

    #[error("favorites store error: {0}")]
    Favorites(String),

    #[error("input error: {0}")]
    Input(String),
}
