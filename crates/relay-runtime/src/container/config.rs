//! # Runtime Configuration
//!
//! Unified configuration for both engines and telemetry.
//!
//! ## Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `RELAY_CERT_FETCH_TIMEOUT_MS` | Bound on a single certificate fetch |
//! | `RELAY_TRUSTED_CERT_HOSTS` | Comma-separated host regexes replacing the SNS default |
//! | `RELAY_ALLOW_ANY_CERT_HOST` | `true` disables the certificate URL allow-list |
//! | `RELAY_SERVER_NAME` | Server name used when a report upload does not name one |
//!
//! Telemetry variables are read by [`TelemetryConfig::from_source`].

use std::env;
use std::time::Duration;

use relay_telemetry::TelemetryConfig;
use sr_01_sns_verification::{CertificateTrustPolicy, VerifierConfig};
use sr_02_scan_extraction::DEFAULT_SERVER_NAME;
use thiserror::Error;

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub verifier: VerifierConfig,
    pub telemetry: TelemetryConfig,
    /// Fallback for `relay report` without `--server`.
    pub default_server_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            verifier: VerifierConfig::default(),
            telemetry: TelemetryConfig::default(),
            default_server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Invalid trusted certificate host pattern: {0}")]
    InvalidHostPattern(#[from] regex::Error),

    #[error(transparent)]
    Verifier(#[from] sr_01_sns_verification::ConfigError),
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            telemetry: TelemetryConfig::from_source(&get),
            ..Self::default()
        };

        if let Some(raw) = get("RELAY_CERT_FETCH_TIMEOUT_MS") {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "RELAY_CERT_FETCH_TIMEOUT_MS",
                    value: raw.clone(),
                })?;
            config.verifier.fetch_timeout = Duration::from_millis(millis);
        }

        let allow_any = get("RELAY_ALLOW_ANY_CERT_HOST")
            .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1");

        if allow_any {
            config.verifier.trust = CertificateTrustPolicy::any_host();
        } else if let Some(hosts) = get("RELAY_TRUSTED_CERT_HOSTS") {
            let patterns: Vec<&str> = hosts
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            if !patterns.is_empty() {
                config.verifier.trust = CertificateTrustPolicy::with_host_patterns(patterns)?;
            }
        }

        if let Some(name) = get("RELAY_SERVER_NAME").filter(|n| !n.trim().is_empty()) {
            config.default_server_name = name.trim().to_string();
        }

        Ok(config)
    }

    /// Reject configurations the engines cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.verifier.validate()?;
        Ok(())
    }
}
