//! # HTTP Adapters
//!
//! `CertificateFetcher` and `SubscriptionConfirmer` over one `reqwest`
//! client. One GET per call, no retries, and redirects are not followed so a
//! trusted host cannot hand the request to an untrusted one.

use crate::ports::outbound::{CertificateFetcher, FetchError, SubscriptionConfirmer};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fetches signing certificates over HTTPS.
#[derive(Debug, Clone)]
pub struct ReqwestCertificateFetcher {
    client: reqwest::Client,
}

impl ReqwestCertificateFetcher {
    /// Build a fetcher whose client gives up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// A confirmer sharing this fetcher's client and connection pool.
    pub fn subscription_confirmer(&self) -> ReqwestSubscriptionConfirmer {
        ReqwestSubscriptionConfirmer {
            client: self.client.clone(),
        }
    }
}

#[async_trait]
impl CertificateFetcher for ReqwestCertificateFetcher {
    async fn fetch_certificate(&self, url: &Url) -> Result<String, FetchError> {
        debug!(cert_url = %url, "Fetching signing certificate");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(body)
    }
}

/// Visits `SubscribeURL`s over HTTPS.
#[derive(Debug, Clone)]
pub struct ReqwestSubscriptionConfirmer {
    client: reqwest::Client,
}

#[async_trait]
impl SubscriptionConfirmer for ReqwestSubscriptionConfirmer {
    async fn confirm_subscription(&self, url: &Url) -> Result<(), FetchError> {
        debug!(subscribe_url = %url, "Confirming SNS subscription");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(())
    }
}
