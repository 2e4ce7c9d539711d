//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the extraction engine.

use crate::domain::summary::ScanReportSummary;
use crate::domain::timing::ScanTiming;
use shared_types::Field;

/// Scan report field extraction.
///
/// Every method is synchronous, never fails, and is safe to call from any
/// worker without synchronization.
pub trait FieldExtractionApi: Send + Sync {
    /// Ordered fields for `log_text`, at most 25. Empty input yields the two
    /// count fields.
    fn extract_fields(&self, log_text: &str) -> Vec<Field>;

    /// Scan start, end and duration, or nothing.
    fn extract_timestamps(&self, log_text: &str) -> ScanTiming;

    /// Fields plus server attribution and severity.
    fn summarize(&self, server: Option<&str>, log_text: &str) -> ScanReportSummary;
}
