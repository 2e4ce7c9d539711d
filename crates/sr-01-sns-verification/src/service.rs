//! # SNS Verification Service
//!
//! Application service implementing `SignatureVerificationApi`.
//!
//! ## Flow
//!
//! 1. Build the canonical string (rejects unsupported types)
//! 2. Check `SigningCertURL` against the trust policy
//! 3. Decode the signature
//! 4. Fetch the certificate through the outbound port, bounded by
//!    `fetch_timeout`
//! 5. Verify with the leaf certificate's RSA key
//!
//! Steps 1-3 never touch the network, so malformed or untrusted envelopes
//! cost no fetch.

use crate::config::VerifierConfig;
use crate::domain::canonical;
use crate::domain::crypto;
use crate::domain::entities::NotificationEnvelope;
use crate::domain::errors::VerificationError;
use crate::ports::inbound::SignatureVerificationApi;
use crate::ports::outbound::CertificateFetcher;
use async_trait::async_trait;
use tracing::{debug, warn};

/// SNS signature verification service.
///
/// Stateless apart from its configuration; safe to share across tasks.
pub struct SnsVerificationService<F: CertificateFetcher> {
    fetcher: F,
    config: VerifierConfig,
}

impl<F: CertificateFetcher> SnsVerificationService<F> {
    /// Create a new verification service.
    ///
    /// # Arguments
    /// * `fetcher` - Certificate retrieval port
    /// * `config` - Timeout and trust policy
    pub fn new(fetcher: F, config: VerifierConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    async fn fetch_certificate(&self, url: &url::Url) -> Result<String, VerificationError> {
        let timeout = self.config.fetch_timeout;
        tokio::time::timeout(timeout, self.fetcher.fetch_certificate(url))
            .await
            .map_err(|_| VerificationError::CertificateFetchTimeout(timeout))?
            .map_err(|e| VerificationError::CertificateFetch(e.to_string()))
    }
}

#[async_trait]
impl<F: CertificateFetcher> SignatureVerificationApi for SnsVerificationService<F> {
    async fn verify_signature(&self, envelope: &NotificationEnvelope) -> bool {
        match self.verify_detailed(envelope).await {
            Ok(()) => {
                debug!(
                    message_id = %envelope.message_id,
                    message_type = %envelope.message_type,
                    "SNS signature verified"
                );
                true
            }
            Err(error) => {
                warn!(
                    message_id = %envelope.message_id,
                    message_type = %envelope.message_type,
                    cert_url = envelope.signing_cert_url.as_deref().unwrap_or_default(),
                    reason = error.reason(),
                    %error,
                    "SNS signature verification failed"
                );
                false
            }
        }
    }

    async fn verify_detailed(
        &self,
        envelope: &NotificationEnvelope,
    ) -> Result<(), VerificationError> {
        let canonical = canonical::string_to_sign(envelope)?;
        let cert_url = self
            .config
            .trust
            .check(envelope.signing_cert_url.as_deref())?;
        let signature = crypto::decode_signature(&envelope.signature)?;

        let body = self.fetch_certificate(&cert_url).await?;
        let public_key = crypto::public_key_from_pem(&body)?;

        crypto::verify_rsa(
            &public_key,
            envelope.signature_version.digest(),
            canonical.as_bytes(),
            &signature,
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
