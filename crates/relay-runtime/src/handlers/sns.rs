//! SNS envelope handling: verify, then summarise verified notifications or
//! complete the subscription handshake.

use std::sync::Arc;

use relay_telemetry::{
    log_event, metric_inc, record_verification, HistogramTimer, OUTCOME_CONFIRMED,
    OUTCOME_VERIFIED, SNS_SUBSCRIPTION_CONFIRMATIONS, SNS_VERIFICATION_DURATION,
};
use shared_types::WebhookPayload;
use sr_01_sns_verification::{
    summarize_notification, ConfirmationError, MessageType, NotificationEnvelope,
    SignatureVerificationApi, SubscriptionConfirmationApi, SummaryError, VerificationError,
};
use thiserror::Error;

/// What a verified envelope turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnsOutcome {
    /// A verified notification summarised for the webhook.
    Notification(WebhookPayload),
    /// A verified subscription confirmation whose `SubscribeURL` was visited.
    Subscribed {
        topic_arn: String,
        subscribe_url: String,
    },
    /// A verified unsubscribe confirmation. Nothing is requested.
    Unsubscribed { topic_arn: String },
}

#[derive(Debug, Error)]
pub enum SnsHandlerError {
    #[error("Invalid SNS envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    #[error("Signature verification failed: {0}")]
    Rejected(#[from] VerificationError),

    #[error("Invalid notification payload: {0}")]
    Payload(#[from] SummaryError),

    #[error("Subscription confirmation failed: {0}")]
    Confirmation(#[from] ConfirmationError),
}

pub struct SnsNotificationHandler<S: SignatureVerificationApi, K: SubscriptionConfirmationApi> {
    verifier: Arc<S>,
    subscriptions: Arc<K>,
}

impl<S, K> SnsNotificationHandler<S, K>
where
    S: SignatureVerificationApi,
    K: SubscriptionConfirmationApi,
{
    pub fn new(verifier: Arc<S>, subscriptions: Arc<K>) -> Self {
        Self {
            verifier,
            subscriptions,
        }
    }

    /// Handle a raw envelope body.
    ///
    /// Nothing is summarised unless the signature verifies.
    pub async fn handle(&self, body: &str) -> Result<SnsOutcome, SnsHandlerError> {
        let envelope =
            NotificationEnvelope::from_json(body).map_err(SnsHandlerError::InvalidEnvelope)?;

        let verdict = {
            let _timer = HistogramTimer::new(&SNS_VERIFICATION_DURATION);
            self.verifier.verify_detailed(&envelope).await
        };

        match &verdict {
            Ok(()) => record_verification(OUTCOME_VERIFIED),
            Err(error) => {
                record_verification(error.reason());
                log_event!(
                    warn,
                    "sns",
                    "Rejected SNS envelope",
                    message_id = %envelope.message_id,
                    message_type = %envelope.message_type,
                    reason = error.reason()
                );
            }
        }
        verdict?;

        match envelope.message_type {
            MessageType::SubscriptionConfirmation => return self.subscribe(envelope).await,
            MessageType::UnsubscribeConfirmation => {
                log_event!(
                    info,
                    "sns",
                    "Verified unsubscribe confirmation",
                    message_id = %envelope.message_id,
                    topic_arn = %envelope.topic_arn
                );
                return Ok(SnsOutcome::Unsubscribed {
                    topic_arn: envelope.topic_arn,
                });
            }
            _ => {}
        }

        let summary = summarize_notification(&envelope.message)?;
        log_event!(
            info,
            "sns",
            "Verified notification",
            message_id = %envelope.message_id,
            kind = ?summary.kind
        );
        Ok(SnsOutcome::Notification(WebhookPayload::single(
            summary.into_embed(),
        )))
    }

    async fn subscribe(
        &self,
        envelope: NotificationEnvelope,
    ) -> Result<SnsOutcome, SnsHandlerError> {
        match self.subscriptions.confirm(&envelope).await {
            Ok(url) => {
                metric_inc!(SNS_SUBSCRIPTION_CONFIRMATIONS, &[OUTCOME_CONFIRMED]);
                Ok(SnsOutcome::Subscribed {
                    topic_arn: envelope.topic_arn,
                    subscribe_url: url.to_string(),
                })
            }
            Err(error) => {
                metric_inc!(SNS_SUBSCRIPTION_CONFIRMATIONS, &[error.reason()]);
                log_event!(
                    error,
                    "sns",
                    "Subscription confirmation failed",
                    message_id = %envelope.message_id,
                    topic_arn = %envelope.topic_arn,
                    reason = error.reason()
                );
                Err(error.into())
            }
        }
    }
}
