//! Error types for the todo API client.
//!
//! # Design
//! Absence on a read is not an error at all: `get_by_id` returns `None` and
//! `list_by_keyword` an empty list. `NotFound` is reserved for mutations
//! whose target is gone, and keeps the offending response as its source.
//! Every other non-2xx response lands in `HttpError` untouched, and
//! connectivity problems or timeouts surface as `Transport`.

use thiserror::Error;

use crate::http::TransportError;

/// A non-success HTTP status together with the raw response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status}: {body}")]
pub struct StatusError {
    pub status: u16,
    pub body: String,
}

/// Errors returned by `TodoClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An update or delete targeted a todo that does not exist.
    #[error("todo does not exist")]
    NotFound(#[source] StatusError),

    /// The server returned a non-2xx status that is not mapped to a domain
    /// outcome.
    #[error(transparent)]
    HttpError(StatusError),

    /// The request never produced a response: connect failure, timeout, or
    /// an I/O error while reading the body.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// A successful create response carried no `Location` header.
    #[error("create response is missing the Location header")]
    MissingLocation,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(cause) | ApiError::HttpError(cause) => Some(cause.status),
            _ => None,
        }
    }
}
