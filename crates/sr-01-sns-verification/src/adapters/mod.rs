//! # Adapters Module
//!
//! Infrastructure implementations of the outbound ports.

pub mod http;

pub use http::{ReqwestCertificateFetcher, ReqwestSubscriptionConfirmer};
