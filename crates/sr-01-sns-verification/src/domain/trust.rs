//! # Certificate URL Trust Policy
//!
//! Decides whether a `SigningCertURL` may be fetched and trusted at all.
//! Runs before any network I/O: a URL that fails here is never requested.
//!
//! The default policy only accepts the producer's own certificate hosts:
//!
//! - scheme `https`
//! - host matching [`DEFAULT_HOST_PATTERN`]
//! - path ending in `.pem`
//!
//! A `SubscribeURL` is held to the same scheme and host rules before the
//! subscription is confirmed; it has no path requirement.

use super::errors::{ConfirmationError, VerificationError};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Regional SNS certificate hosts, including the China partition.
pub const DEFAULT_HOST_PATTERN: &str = r"^sns\.[a-z0-9-]+\.amazonaws\.com(\.cn)?$";

static DEFAULT_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_HOST_PATTERN).expect("default host pattern is valid"));

/// Which certificate URLs are acceptable.
#[derive(Debug, Clone)]
pub struct CertificateTrustPolicy {
    require_https: bool,
    require_pem_path: bool,
    /// `None` accepts every host.
    host_patterns: Option<Vec<Regex>>,
}

impl Default for CertificateTrustPolicy {
    fn default() -> Self {
        Self {
            require_https: true,
            require_pem_path: true,
            host_patterns: Some(vec![DEFAULT_HOST.clone()]),
        }
    }
}

impl CertificateTrustPolicy {
    /// Accept any syntactically valid URL.
    ///
    /// An attacker who controls the URL can then supply their own
    /// certificate, so this is only suitable for tests and closed networks.
    pub fn any_host() -> Self {
        Self {
            require_https: false,
            require_pem_path: false,
            host_patterns: None,
        }
    }

    /// Strict policy with a custom host allow-list (anchored regexes).
    pub fn with_host_patterns<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let host_patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host_patterns: Some(host_patterns),
            ..Self::default()
        })
    }

    pub fn allows_any_host(&self) -> bool {
        self.host_patterns.is_none()
    }

    /// Parse `raw` and apply the policy to a `SigningCertURL`.
    pub fn check(&self, raw: Option<&str>) -> Result<Url, VerificationError> {
        let raw = non_blank(raw).ok_or(VerificationError::MissingCertificateUrl)?;

        let url =
            Url::parse(raw).map_err(|e| VerificationError::InvalidCertificateUrl(e.to_string()))?;

        self.check_origin(&url)
            .map_err(VerificationError::UntrustedCertificateUrl)?;

        if self.require_pem_path && !url.path().ends_with(".pem") {
            return Err(VerificationError::UntrustedCertificateUrl(format!(
                "path {} is not a .pem file",
                url.path()
            )));
        }

        Ok(url)
    }

    /// Parse `raw` and apply the scheme and host rules to a `SubscribeURL`.
    pub fn check_subscribe_url(&self, raw: Option<&str>) -> Result<Url, ConfirmationError> {
        let raw = non_blank(raw).ok_or(ConfirmationError::MissingSubscribeUrl)?;

        let url =
            Url::parse(raw).map_err(|e| ConfirmationError::InvalidSubscribeUrl(e.to_string()))?;

        self.check_origin(&url)
            .map_err(ConfirmationError::UntrustedSubscribeUrl)?;
        Ok(url)
    }

    fn check_origin(&self, url: &Url) -> Result<(), String> {
        if self.require_https && url.scheme() != "https" {
            return Err(format!("scheme {} is not https", url.scheme()));
        }

        if let Some(patterns) = &self.host_patterns {
            let host = url.host_str().unwrap_or_default();
            if !patterns.iter().any(|p| p.is_match(host)) {
                return Err(format!("host {host:?} is not an allowed host"));
            }
        }
        Ok(())
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
