//! # SNS Signature Verification Subsystem (SR-01)
//!
//! Decides whether an inbound SNS notification envelope was really signed by
//! its producer.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): canonical string, trust policy, RSA checks
//! - **Ports Layer** (`ports/`): the verification API and the certificate
//!   fetch dependency
//! - **Adapters Layer** (`adapters/`): `reqwest` certificate fetcher and
//!   subscription confirmer
//! - **Service Layer** (`service.rs`, `subscription.rs`): wires domain logic
//!   to ports
//!
//! ## Security Notes
//!
//! - **One Answer**: every failure is `false`; `verify_detailed` exists for
//!   logs, never for responses to the sender
//! - **Trust Before Fetch**: `SigningCertURL` is checked against an allow-list
//!   before any request is made
//! - **Bounded Fetch**: certificate retrieval is cancelled after
//!   `fetch_timeout`
//! - **Leaf Only**: no chain walking or revocation checks

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod subscription;

// Re-export public API
pub use adapters::{ReqwestCertificateFetcher, ReqwestSubscriptionConfirmer};
pub use config::{ConfigError, VerifierConfig, DEFAULT_FETCH_TIMEOUT};
pub use domain::canonical::string_to_sign;
pub use domain::entities::{MessageType, NotificationEnvelope, SignatureDigest, SignatureVersion};
pub use domain::errors::{ConfirmationError, VerificationError};
pub use domain::ses::{summarize_notification, NotificationSummary, SesEventKind, SummaryError};
pub use domain::trust::{CertificateTrustPolicy, DEFAULT_HOST_PATTERN};
pub use ports::inbound::{SignatureVerificationApi, SubscriptionConfirmationApi};
pub use ports::outbound::{CertificateFetcher, FetchError, SubscriptionConfirmer};
pub use service::SnsVerificationService;
pub use subscription::SubscriptionConfirmationService;
