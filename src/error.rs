//! Error types surfaced by the SDK
//!
//! Errors are layered: the fetch step reports a [`FetchError`] without knowing
//! which resource it was asked for, and the resolver wraps it into an [`Error`]
//! carrying the [`ResourceKind`] for diagnostics.

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::ResourceKind;

/// Failures below the HTTP status line: connection problems, timeouts and
/// cancellation of the request context.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client failed to send the request or read the body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request context was cancelled before the response arrived
    #[error("request was cancelled")]
    Cancelled,

    /// The request context deadline passed before the response arrived
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

/// Errors returned by [`FetchClient::fetch`](crate::client::FetchClient::fetch)
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered 404
    #[error("resource not found")]
    NotFound,

    /// The server answered with any other non-200 status
    #[error("server responded with status {0}")]
    RequestFailed(StatusCode),

    /// The request never produced a status
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors returned by the resolver and the paginated cursor
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource does not exist
    #[error("{kind} not found")]
    NotFound { kind: ResourceKind },

    /// The server rejected the request
    #[error("failed to fetch {kind}: server responded with status {status}")]
    RequestFailed {
        kind: ResourceKind,
        status: StatusCode,
    },

    /// Connection, timeout or cancellation failure
    #[error("failed to fetch {kind}: {source}")]
    Transport {
        kind: ResourceKind,
        #[source]
        source: TransportError,
    },

    /// A freshly fetched payload was not valid JSON for the target type
    #[error("failed to decode {kind} response: {source}")]
    Decode {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    /// The cursor has already delivered its last page
    #[error("no more pages")]
    EndOfPages,

    /// The underlying HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl Error {
    /// Attaches the resource kind to a fetch failure.
    pub(crate) fn from_fetch(kind: ResourceKind, err: FetchError) -> Self {
        match err {
            FetchError::NotFound => Error::NotFound { kind },
            FetchError::RequestFailed(status) => Error::RequestFailed { kind, status },
            FetchError::Transport(source) => Error::Transport { kind, source },
        }
    }

    /// Returns true if the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns true if a cursor has no more pages to deliver.
    pub fn is_end_of_pages(&self) -> bool {
        matches!(self, Error::EndOfPages)
    }
}
