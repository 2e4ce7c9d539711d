//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the verification engine needs from the outside world.

use thiserror::Error;
use url::Url;

/// Error from an outbound HTTP call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or read failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// 2xx with nothing in the body (certificate fetch only)
    #[error("Empty response body")]
    EmptyBody,
}

/// Retrieves the PEM text of a signing certificate.
///
/// Called at most once per verification, only after the URL passed the trust
/// policy. Implementations must not retry; the engine bounds the call with
/// its own timeout.
#[async_trait::async_trait]
pub trait CertificateFetcher: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// # Errors
    /// * `FetchError::Transport` - the request could not be completed
    /// * `FetchError::Status` - non-success response
    /// * `FetchError::EmptyBody` - success response with no content
    async fn fetch_certificate(&self, url: &Url) -> Result<String, FetchError>;
}

/// Visits a `SubscribeURL` to complete the subscription handshake.
///
/// Called only for a verified `SubscriptionConfirmation` whose URL passed
/// the trust policy. The response body is not inspected.
#[async_trait::async_trait]
pub trait SubscriptionConfirmer: Send + Sync {
    /// GET `url`, succeeding on any 2xx status.
    async fn confirm_subscription(&self, url: &Url) -> Result<(), FetchError>;
}
