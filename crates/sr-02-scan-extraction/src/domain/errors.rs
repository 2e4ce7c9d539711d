//! # Extraction Errors
//!
//! Extraction itself never fails. The only internal error is a timestamp
//! that cannot be read, and it is swallowed into "no timing fields".

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// No accepted format matched
    #[error("Unrecognised timestamp: {0:?}")]
    Unparseable(String),
}
