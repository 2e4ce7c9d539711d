//! Prometheus metrics for the relay.
//!
//! All metrics follow the naming convention: `relay_<area>_<metric>_<unit>`
//!
//! - `relay_sns_verifications_total{outcome}`: one per verified envelope,
//!   `outcome` is `verified` or a failure reason label
//! - `relay_sns_verification_duration_seconds`: end-to-end verification time
//! - `relay_sns_subscription_confirmations_total{outcome}`: subscription
//!   handshakes, `outcome` is `confirmed` or a failure reason label
//! - `relay_scan_reports_parsed_total`: rkhunter reports summarized
//! - `relay_scan_fields_extracted_total`: fields produced across all reports

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

/// Label recorded for a successful verification.
pub const OUTCOME_VERIFIED: &str = "verified";

/// Label recorded for a confirmed subscription.
pub const OUTCOME_CONFIRMED: &str = "confirmed";

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // SNS VERIFICATION
    // =========================================================================

    pub static ref SNS_VERIFICATIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("relay_sns_verifications_total", "SNS signature verifications by outcome"),
        &["outcome"]
    ).expect("metric creation failed");

    pub static ref SNS_VERIFICATION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "relay_sns_verification_duration_seconds",
            "Time spent verifying an SNS envelope, certificate fetch included"
        ).buckets(exponential_buckets(0.001, 2.0, 14).expect("metric creation failed"))
    ).expect("metric creation failed");

    pub static ref SNS_SUBSCRIPTION_CONFIRMATIONS: IntCounterVec = IntCounterVec::new(
        Opts::new(
            "relay_sns_subscription_confirmations_total",
            "SNS subscription confirmations by outcome"
        ),
        &["outcome"]
    ).expect("metric creation failed");

    // =========================================================================
    // SCAN REPORTS
    // =========================================================================

    pub static ref SCAN_REPORTS_PARSED: IntCounter = IntCounter::new(
        "relay_scan_reports_parsed_total",
        "rkhunter reports summarized"
    ).expect("metric creation failed");

    pub static ref SCAN_FIELDS_EXTRACTED: IntCounter = IntCounter::new(
        "relay_scan_fields_extracted_total",
        "Embed fields extracted from rkhunter reports"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Calling this more than once is harmless.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(SNS_VERIFICATIONS.clone()),
        Box::new(SNS_VERIFICATION_DURATION.clone()),
        Box::new(SNS_SUBSCRIPTION_CONFIRMATIONS.clone()),
        Box::new(SCAN_REPORTS_PARSED.clone()),
        Box::new(SCAN_FIELDS_EXTRACTED.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

pub fn record_verification(outcome: &str) {
    crate::metric_inc!(SNS_VERIFICATIONS, &[outcome]);
}

pub fn record_scan_report(field_count: usize) {
    crate::metric_inc!(SCAN_REPORTS_PARSED);
    SCAN_FIELDS_EXTRACTED.inc_by(field_count as u64);
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
