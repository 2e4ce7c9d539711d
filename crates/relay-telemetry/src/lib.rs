//! # Relay Telemetry
//!
//! Structured logging and Prometheus counters shared by the relay binary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use relay_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RELAY_SERVICE_NAME` | `signal-relay` | Service name in logs |
//! | `RELAY_LOG_LEVEL` | `info` | Log level filter, falls back to `RUST_LOG` |
//! | `RELAY_JSON_LOGS` | `false` | JSON log lines (default on in containers) |
//! | `RELAY_CONSOLE_OUTPUT` | `true` | Write logs to stderr |

mod config;
mod logging;
mod metrics;

pub use config::{TelemetryConfig, DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_NAME};
pub use logging::{env_filter, init_logging};
pub use metrics::{
    encode_metrics, record_scan_report, record_verification, register_metrics, HistogramTimer,
    OUTCOME_CONFIRMED, OUTCOME_VERIFIED, REGISTRY, SCAN_FIELDS_EXTRACTED, SCAN_REPORTS_PARSED,
    SNS_SUBSCRIPTION_CONFIRMATIONS, SNS_VERIFICATIONS, SNS_VERIFICATION_DURATION,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics, then install the global log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
