//! Verifier configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use sr_01_sns_verification::{CertificateTrustPolicy, VerifierConfig};
//! use std::time::Duration;
//!
//! let config = VerifierConfig::default()
//!     .with_fetch_timeout(Duration::from_secs(2))
//!     .with_trust(CertificateTrustPolicy::any_host());
//! config.validate().expect("valid config");
//! ```

use crate::domain::trust::CertificateTrustPolicy;
use std::time::Duration;
use thiserror::Error;

/// Default bound on a single certificate fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Rejected verifier configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Certificate fetch timeout must be greater than zero")]
    ZeroFetchTimeout,
}

/// Verifier configuration.
#[derive(Clone, Debug)]
pub struct VerifierConfig {
    /// Upper bound on the certificate fetch; expiry is a verification failure
    pub fetch_timeout: Duration,
    /// Which `SigningCertURL`s may be fetched
    pub trust: CertificateTrustPolicy,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            trust: CertificateTrustPolicy::default(),
        }
    }
}

impl VerifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::ZeroFetchTimeout);
        }
        Ok(())
    }

    /// Builder-style method to set the fetch timeout
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Builder-style method to set the trust policy
    pub fn with_trust(mut self, trust: CertificateTrustPolicy) -> Self {
        self.trust = trust;
        self
    }
}
