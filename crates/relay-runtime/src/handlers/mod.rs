//! # Handlers
//!
//! Bridge raw inputs (envelope bodies, report text) to the engines and
//! produce webhook payloads. Every handled input is counted in the
//! relay metrics.

pub mod scan_report;
pub mod sns;

pub use scan_report::ScanReportHandler;
pub use sns::{SnsHandlerError, SnsNotificationHandler, SnsOutcome};
