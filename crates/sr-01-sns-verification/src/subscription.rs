//! # Subscription Handshake Service
//!
//! Application service implementing `SubscriptionConfirmationApi`.
//!
//! ## Flow
//!
//! 1. Accept only `SubscriptionConfirmation` envelopes
//! 2. Check `SubscribeURL` against the trust policy (scheme and host)
//! 3. Visit the URL through the outbound port, bounded by `fetch_timeout`
//!
//! Signature verification is the caller's job and must come first.

use crate::config::VerifierConfig;
use crate::domain::entities::{MessageType, NotificationEnvelope};
use crate::domain::errors::ConfirmationError;
use crate::ports::inbound::SubscriptionConfirmationApi;
use crate::ports::outbound::SubscriptionConfirmer;
use async_trait::async_trait;
use tracing::info;
use url::Url;

/// Confirms verified SNS subscriptions.
pub struct SubscriptionConfirmationService<C: SubscriptionConfirmer> {
    confirmer: C,
    config: VerifierConfig,
}

impl<C: SubscriptionConfirmer> SubscriptionConfirmationService<C> {
    pub fn new(confirmer: C, config: VerifierConfig) -> Self {
        Self { confirmer, config }
    }
}

#[async_trait]
impl<C: SubscriptionConfirmer> SubscriptionConfirmationApi for SubscriptionConfirmationService<C> {
    async fn confirm(&self, envelope: &NotificationEnvelope) -> Result<Url, ConfirmationError> {
        if envelope.message_type != MessageType::SubscriptionConfirmation {
            return Err(ConfirmationError::NotASubscription(
                envelope.message_type.to_string(),
            ));
        }

        let url = self
            .config
            .trust
            .check_subscribe_url(envelope.subscribe_url.as_deref())?;

        let timeout = self.config.fetch_timeout;
        tokio::time::timeout(timeout, self.confirmer.confirm_subscription(&url))
            .await
            .map_err(|_| ConfirmationError::Timeout(timeout))?
            .map_err(|e| ConfirmationError::Request(e.to_string()))?;

        info!(
            message_id = %envelope.message_id,
            topic_arn = %envelope.topic_arn,
            "SNS subscription confirmed"
        );
        Ok(url)
    }
}
