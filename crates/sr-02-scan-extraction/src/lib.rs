//! # Scan Report Extraction Subsystem (SR-02)
//!
//! Turns free-form rkhunter report text into an ordered, bounded list of
//! embed fields.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): the pass pipeline, timing, summaries
//! - **Ports Layer** (`ports/`): `FieldExtractionApi`
//! - **Service Layer** (`service.rs`): `ScanReportExtractor`
//!
//! ## Guarantees
//!
//! - **Pure**: identical text always yields identical, identically ordered
//!   fields
//! - **Total**: no input makes extraction fail; absent patterns skip fields
//! - **Bounded**: at most 25 fields, each value at most 1024 characters

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::errors::TimestampError;
pub use domain::pipeline::{extract_fields, Pass, Transform, MAX_FINDING_LINES, PIPELINE};
pub use domain::summary::{ScanReportSummary, ScanSeverity, DEFAULT_SERVER_NAME};
pub use domain::timing::{extract_scan_timestamps, format_duration, parse_utc, ScanTiming};
pub use ports::inbound::FieldExtractionApi;
pub use service::ScanReportExtractor;
