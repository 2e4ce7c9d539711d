//! # Verification Errors
//!
//! Every variant is a reason for a `false` trust decision. The variants exist
//! for diagnostics only: callers of the boolean API never see them.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while verifying an envelope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The envelope carries no `SigningCertURL`
    #[error("Envelope has no signing certificate URL")]
    MissingCertificateUrl,

    /// `SigningCertURL` is not a syntactically valid URL
    #[error("Invalid signing certificate URL: {0}")]
    InvalidCertificateUrl(String),

    /// `SigningCertURL` parsed but failed the trust policy
    #[error("Untrusted signing certificate URL: {0}")]
    UntrustedCertificateUrl(String),

    /// `Type` is not one of the three signed message types
    #[error("Unsupported message type: {0:?}")]
    UnsupportedMessageType(String),

    /// A field that contributes to the canonical string is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The certificate fetch port reported a failure
    #[error("Certificate fetch failed: {0}")]
    CertificateFetch(String),

    /// The certificate fetch did not complete in time
    #[error("Certificate fetch timed out after {0:?}")]
    CertificateFetchTimeout(Duration),

    /// The fetched body contains no PEM certificate block
    #[error("No certificate found in fetched body")]
    EmptyCertificate,

    /// The PEM block does not decode as an X.509 certificate
    #[error("Malformed certificate: {0}")]
    MalformedCertificate(String),

    /// The certificate's subject key is not an RSA key
    #[error("Unsupported certificate key: {0}")]
    UnsupportedKey(String),

    /// `Signature` is not valid base64 or has the wrong shape
    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    /// Well-formed inputs, but the signature does not verify
    #[error("Signature does not match canonical string")]
    SignatureMismatch,
}

impl VerificationError {
    /// Short stable label, used as a metric label and log field.
    pub fn reason(&self) -> &'static str {
        match self {
            VerificationError::MissingCertificateUrl => "missing_cert_url",
            VerificationError::InvalidCertificateUrl(_) => "invalid_cert_url",
            VerificationError::UntrustedCertificateUrl(_) => "untrusted_cert_url",
            VerificationError::UnsupportedMessageType(_) => "unsupported_type",
            VerificationError::MissingField(_) => "missing_field",
            VerificationError::CertificateFetch(_) => "fetch_failed",
            VerificationError::CertificateFetchTimeout(_) => "fetch_timeout",
            VerificationError::EmptyCertificate => "empty_certificate",
            VerificationError::MalformedCertificate(_) => "malformed_certificate",
            VerificationError::UnsupportedKey(_) => "unsupported_key",
            VerificationError::MalformedSignature(_) => "malformed_signature",
            VerificationError::SignatureMismatch => "signature_mismatch",
        }
    }
}

/// Errors from confirming a subscription handshake.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfirmationError {
    /// Only `SubscriptionConfirmation` envelopes are confirmed
    #[error("Not a subscription confirmation: {0:?}")]
    NotASubscription(String),

    /// The envelope carries no `SubscribeURL`
    #[error("Envelope has no subscribe URL")]
    MissingSubscribeUrl,

    /// `SubscribeURL` is not a syntactically valid URL
    #[error("Invalid subscribe URL: {0}")]
    InvalidSubscribeUrl(String),

    /// `SubscribeURL` parsed but failed the trust policy
    #[error("Untrusted subscribe URL: {0}")]
    UntrustedSubscribeUrl(String),

    /// The confirmation port reported a failure
    #[error("Subscription confirmation failed: {0}")]
    Request(String),

    /// The confirmation request did not complete in time
    #[error("Subscription confirmation timed out after {0:?}")]
    Timeout(Duration),
}

impl ConfirmationError {
    /// Short stable label, used as a metric label and log field.
    pub fn reason(&self) -> &'static str {
        match self {
            ConfirmationError::NotASubscription(_) => "not_a_subscription",
            ConfirmationError::MissingSubscribeUrl => "missing_subscribe_url",
            ConfirmationError::InvalidSubscribeUrl(_) => "invalid_subscribe_url",
            ConfirmationError::UntrustedSubscribeUrl(_) => "untrusted_subscribe_url",
            ConfirmationError::Request(_) => "confirm_failed",
            ConfirmationError::Timeout(_) => "confirm_timeout",
        }
    }
}
