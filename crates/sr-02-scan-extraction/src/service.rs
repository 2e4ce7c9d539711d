//! # Scan Report Extraction Service
//!
//! Implements `FieldExtractionApi` over the static pipeline.

use crate::domain::pipeline;
use crate::domain::summary::ScanReportSummary;
use crate::domain::timing::{self, ScanTiming};
use crate::ports::inbound::FieldExtractionApi;
use shared_types::Field;
use tracing::debug;

/// Stateless rkhunter report extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanReportExtractor;

impl ScanReportExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractionApi for ScanReportExtractor {
    fn extract_fields(&self, log_text: &str) -> Vec<Field> {
        let fields = pipeline::extract_fields(log_text);
        debug!(
            bytes = log_text.len(),
            field_count = fields.len(),
            "Extracted scan report fields"
        );
        fields
    }

    fn extract_timestamps(&self, log_text: &str) -> ScanTiming {
        timing::extract_scan_timestamps(log_text)
    }

    fn summarize(&self, server: Option<&str>, log_text: &str) -> ScanReportSummary {
        let summary = ScanReportSummary::build(server, self.extract_fields(log_text));
        debug!(
            server = %summary.server,
            warnings = summary.warnings,
            errors = summary.errors,
            severity = ?summary.severity,
            "Summarized scan report"
        );
        summary
    }
}
