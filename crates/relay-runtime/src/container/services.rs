//! # Service Container
//!
//! Holds the two engines with their adapters wired in. The certificate
//! fetcher and the subscription confirmer share one HTTP client.

use std::sync::Arc;

use sr_01_sns_verification::{
    CertificateFetcher, FetchError, ReqwestCertificateFetcher, ReqwestSubscriptionConfirmer,
    SnsVerificationService, SubscriptionConfirmationService, SubscriptionConfirmer,
};
use sr_02_scan_extraction::ScanReportExtractor;
use thiserror::Error;
use tracing::info;

use crate::container::config::{ConfigError, RuntimeConfig};
use crate::handlers::{ScanReportHandler, SnsNotificationHandler};

/// Startup failures.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Fetcher(#[from] FetchError),
}

/// Both engines plus the configuration they were built from.
pub struct RelayContainer<
    F: CertificateFetcher = ReqwestCertificateFetcher,
    C: SubscriptionConfirmer = ReqwestSubscriptionConfirmer,
> {
    pub verifier: Arc<SnsVerificationService<F>>,
    pub subscriptions: Arc<SubscriptionConfirmationService<C>>,
    pub extractor: ScanReportExtractor,
    pub config: RuntimeConfig,
}

impl RelayContainer {
    /// Validate `config` and wire the HTTP adapters.
    pub fn new(config: RuntimeConfig) -> Result<Self, ContainerError> {
        config.validate()?;
        let fetcher = ReqwestCertificateFetcher::new(config.verifier.fetch_timeout)?;
        let confirmer = fetcher.subscription_confirmer();
        Ok(Self::with_adapters(fetcher, confirmer, config))
    }
}

impl<F: CertificateFetcher, C: SubscriptionConfirmer> RelayContainer<F, C> {
    pub fn with_adapters(fetcher: F, confirmer: C, config: RuntimeConfig) -> Self {
        info!(
            fetch_timeout_ms = config.verifier.fetch_timeout.as_millis() as u64,
            any_cert_host = config.verifier.trust.allows_any_host(),
            default_server = %config.default_server_name,
            "Relay services initialized"
        );

        Self {
            verifier: Arc::new(SnsVerificationService::new(
                fetcher,
                config.verifier.clone(),
            )),
            subscriptions: Arc::new(SubscriptionConfirmationService::new(
                confirmer,
                config.verifier.clone(),
            )),
            extractor: ScanReportExtractor::new(),
            config,
        }
    }

    pub fn sns_handler(
        &self,
    ) -> SnsNotificationHandler<SnsVerificationService<F>, SubscriptionConfirmationService<C>> {
        SnsNotificationHandler::new(Arc::clone(&self.verifier), Arc::clone(&self.subscriptions))
    }

    pub fn scan_report_handler(&self) -> ScanReportHandler<ScanReportExtractor> {
        ScanReportHandler::new(self.extractor, self.config.default_server_name.clone())
    }
}
