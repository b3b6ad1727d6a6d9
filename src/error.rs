//! Error taxonomy for the client.
//!
//! The surface is deliberately closed: identifier and cardinality failures
//! are produced by this crate, everything else (network, non-2xx status,
//! body parse) is surfaced unchanged from the transport.

use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An object was passed where an identifier was required, but it
    /// carries no `id` field.
    #[error("an identifier is required but the object has no 'id' field")]
    MissingIdentifier,

    /// An "exactly one" query resolved to zero or more than one result.
    #[error("expected exactly one result but got {got}")]
    Cardinality { got: usize },

    /// The response body did not have the shape the operation expects
    /// (e.g. a collection endpoint returned something other than an array).
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Network failure, non-success status or body read failure from the
    /// default HTTP transport. Not interpreted further by this crate.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// Failure raised by a custom injected transport.
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Error::Cardinality { .. })
    }

    pub fn is_missing_identifier(&self) -> bool {
        matches!(self, Error::MissingIdentifier)
    }
}
