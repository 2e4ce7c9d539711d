//! rkhunter report handling.

use relay_telemetry::{log_event, record_scan_report};
use shared_types::{Field, WebhookPayload};
use sr_02_scan_extraction::FieldExtractionApi;

pub struct ScanReportHandler<E: FieldExtractionApi> {
    extractor: E,
    default_server_name: String,
}

impl<E: FieldExtractionApi> ScanReportHandler<E> {
    pub fn new(extractor: E, default_server_name: impl Into<String>) -> Self {
        Self {
            extractor,
            default_server_name: default_server_name.into(),
        }
    }

    /// Summarise a report into a single-embed webhook payload.
    ///
    /// A missing or blank `server` falls back to the configured default.
    pub fn report(&self, server: Option<&str>, log_text: &str) -> WebhookPayload {
        let server = server
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.default_server_name);

        let summary = self.extractor.summarize(Some(server), log_text);
        record_scan_report(summary.fields.len());
        log_event!(
            info,
            "scan_report",
            "Processed scan report",
            server = %summary.server,
            severity = ?summary.severity,
            field_count = summary.fields.len()
        );

        WebhookPayload::single(summary.into_embed())
    }

    /// The raw extracted fields, without the server field.
    pub fn fields(&self, log_text: &str) -> Vec<Field> {
        let fields = self.extractor.extract_fields(log_text);
        record_scan_report(fields.len());
        fields
    }
}
