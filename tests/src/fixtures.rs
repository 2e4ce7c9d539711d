//! Test fixtures shared by flows and benchmarks.
//!
//! Signatures were produced with OpenSSL from `signing-key.pem`; the
//! certificate is self-signed and only meaningful to these tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use relay_runtime::{RelayContainer, RuntimeConfig};
use sr_01_sns_verification::{CertificateFetcher, FetchError, SubscriptionConfirmer};
use url::Url;

pub const SIGNING_CERT: &str =
    include_str!("../../crates/sr-01-sns-verification/testdata/signing-cert.pem");
pub const OTHER_CERT: &str =
    include_str!("../../crates/sr-01-sns-verification/testdata/other-cert.pem");

/// Signed SES bounce notification, SignatureVersion 1.
pub const BOUNCE_ENVELOPE: &str =
    include_str!("../../crates/sr-01-sns-verification/testdata/ses-bounce-notification.json");

/// Signed SubscriptionConfirmation.
pub const SUBSCRIPTION_ENVELOPE: &str =
    include_str!("../../crates/sr-01-sns-verification/testdata/subscription-confirmation.json");

/// Full rkhunter run with warnings and one error.
pub const RKHUNTER_REPORT: &str =
    include_str!("../../crates/sr-02-scan-extraction/testdata/rkhunter.log");

/// Serves a fixed certificate body without any network access.
pub struct StaticCertificateFetcher {
    pub body: String,
}

impl StaticCertificateFetcher {
    pub fn signing() -> Self {
        Self {
            body: SIGNING_CERT.to_string(),
        }
    }
}

#[async_trait]
impl CertificateFetcher for StaticCertificateFetcher {
    async fn fetch_certificate(&self, _url: &Url) -> Result<String, FetchError> {
        Ok(self.body.clone())
    }
}

/// Accepts every subscription and records the URLs it was given.
#[derive(Clone, Default)]
pub struct RecordingConfirmer {
    pub visited: Arc<Mutex<Vec<Url>>>,
}

#[async_trait]
impl SubscriptionConfirmer for RecordingConfirmer {
    async fn confirm_subscription(&self, url: &Url) -> Result<(), FetchError> {
        self.visited.lock().unwrap().push(url.clone());
        Ok(())
    }
}

/// Runtime container with no network access.
pub fn offline_container(
    config: RuntimeConfig,
) -> RelayContainer<StaticCertificateFetcher, RecordingConfirmer> {
    RelayContainer::with_adapters(
        StaticCertificateFetcher::signing(),
        RecordingConfirmer::default(),
        config,
    )
}

/// Replace one top-level string member of an envelope.
pub fn with_member(envelope: &str, key: &str, value: &str) -> String {
    let mut json: serde_json::Value =
        serde_json::from_str(envelope).expect("fixture envelope is JSON");
    json[key] = serde_json::Value::String(value.to_string());
    json.to_string()
}
