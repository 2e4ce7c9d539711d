//! # Scan Report Summary
//!
//! Wraps extracted fields for presentation: server attribution and a
//! severity colour derived from the `Warnings`/`Errors` counts.

use super::pipeline::{count_of, ERRORS, WARNINGS};
use serde::Serialize;
use shared_types::{cap_fields, colors, Embed, Field};

/// Server name used when the uploader did not identify itself.
pub const DEFAULT_SERVER_NAME: &str = "Unknown Server";

pub const SUMMARY_DESCRIPTION: &str = "📋 **RKHunter Scan Summary**";

/// Overall outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanSeverity {
    Clean,
    Warning,
    Critical,
}

impl ScanSeverity {
    /// Errors dominate warnings.
    pub fn classify(fields: &[Field]) -> Self {
        if count_of(fields, ERRORS) > 0 {
            ScanSeverity::Critical
        } else if count_of(fields, WARNINGS) > 0 {
            ScanSeverity::Warning
        } else {
            ScanSeverity::Clean
        }
    }

    pub fn color(self) -> u32 {
        match self {
            ScanSeverity::Clean => colors::BRIGHT_GREEN,
            ScanSeverity::Warning => colors::AMBER,
            ScanSeverity::Critical => colors::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReportSummary {
    pub server: String,
    pub severity: ScanSeverity,
    pub warnings: usize,
    pub errors: usize,
    /// `Server` first, then the extracted fields, capped at 25
    pub fields: Vec<Field>,
}

impl ScanReportSummary {
    pub fn build(server: Option<&str>, extracted: Vec<Field>) -> Self {
        let server = server
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SERVER_NAME)
            .to_string();

        let severity = ScanSeverity::classify(&extracted);
        let warnings = count_of(&extracted, WARNINGS);
        let errors = count_of(&extracted, ERRORS);

        let mut fields = Vec::with_capacity(extracted.len() + 1);
        fields.push(Field::inline("Server", server.clone()));
        fields.extend(extracted);
        cap_fields(&mut fields);

        Self {
            server,
            severity,
            warnings,
            errors,
            fields,
        }
    }

    pub fn title(&self) -> String {
        format!("RKHunter Log - {}", self.server)
    }

    pub fn into_embed(self) -> Embed {
        Embed::new(SUMMARY_DESCRIPTION)
            .with_title(self.title())
            .with_color(self.severity.color())
            .with_current_timestamp()
            .with_fields(self.fields)
    }
}
