//! # Domain Layer
//!
//! Canonicalization, trust policy and RSA checks. No I/O lives here; the
//! certificate fetch is reached only through the outbound port.

pub mod canonical;
pub mod crypto;
pub mod entities;
pub mod errors;
pub mod ses;
pub mod trust;
