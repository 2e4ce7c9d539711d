//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the verification engine.

use crate::domain::entities::NotificationEnvelope;
use crate::domain::errors::{ConfirmationError, VerificationError};
use url::Url;

/// Envelope signature verification.
///
/// Implementations must be thread-safe (`Send + Sync`) and hold no mutable
/// state between calls.
#[async_trait::async_trait]
pub trait SignatureVerificationApi: Send + Sync {
    /// Trust decision for `envelope`.
    ///
    /// Every failure cause (missing URL, unsupported type, fetch failure,
    /// malformed input, mismatch) yields `false`. May suspend on the
    /// certificate fetch, bounded by the configured timeout.
    async fn verify_signature(&self, envelope: &NotificationEnvelope) -> bool;

    /// Same decision as [`verify_signature`](Self::verify_signature), with
    /// the failure cause kept for diagnostics.
    async fn verify_detailed(
        &self,
        envelope: &NotificationEnvelope,
    ) -> Result<(), VerificationError>;
}

/// Subscription handshake.
#[async_trait::async_trait]
pub trait SubscriptionConfirmationApi: Send + Sync {
    /// Confirm the subscription announced by `envelope` and return the URL
    /// that was visited.
    ///
    /// Callers must verify the envelope's signature first; this only checks
    /// the message type and the `SubscribeURL` against the trust policy.
    async fn confirm(&self, envelope: &NotificationEnvelope) -> Result<Url, ConfirmationError>;
}
