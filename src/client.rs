//! HTTP fetch step
//!
//! [`FetchClient`] issues a single GET, classifies the status line and hands
//! the raw body back to the caller. Decoding is the resolver's job.
//! [`RequestContext`] carries cancellation and an optional deadline that every
//! fetch honors on top of the client-wide timeout.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{FetchError, TransportError};

/// Cancellation and deadline for one or more requests
///
/// Cloning a context shares its cancellation token; use [`child`](Self::child)
/// to derive a context that can be cancelled on its own.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A context cancelled through an existing token
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Sets a deadline `timeout` from now, keeping an earlier one if present.
    ///
    /// A timeout too large to represent leaves the deadline unchanged.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Sets an absolute deadline, keeping an earlier one if present.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Derives a context that is cancelled with this one but can also be cancelled alone.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancels this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true once this context or one of its parents has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The instant after which requests fail with `DeadlineExceeded`, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drives `fut` until it completes, the context is cancelled, or the deadline passes.
    pub(crate) async fn run<F, T, E>(&self, fut: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<TransportError>,
    {
        if self.token.is_cancelled() {
            return Err(TransportError::Cancelled.into());
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(TransportError::Cancelled.into()),
            _ = deadline => Err(TransportError::DeadlineExceeded.into()),
            result = fut => result,
        }
    }
}

/// Issues GET requests and classifies the response status
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
}

impl FetchClient {
    /// Creates a client whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Create a FetchClient with a custom HTTP client
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Fetches `url` and returns the response body.
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The full body of a 200 response
    /// * `Err(FetchError::NotFound)` - The server answered 404
    /// * `Err(FetchError::RequestFailed)` - Any other non-200 status
    /// * `Err(FetchError::Transport)` - Connection failure, timeout or cancellation
    pub async fn fetch(&self, url: &str, ctx: &RequestContext) -> Result<Vec<u8>, FetchError> {
        ctx.run(self.send(url)).await
    }

    async fn send(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "sending request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            if status == StatusCode::NOT_FOUND {
                return Err(FetchError::NotFound);
            }
            return Err(FetchError::RequestFailed(status));
        }

        let body = response.bytes().await.map_err(TransportError::from)?;
        Ok(body.to_vec())
    }
}
