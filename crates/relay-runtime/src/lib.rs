//! # Relay Runtime Library
//!
//! Exposes the runtime's modules for testing. The entry point is the `relay`
//! binary in `main.rs`.
//!
//! - `container/` - environment configuration and engine wiring
//! - `handlers/` - raw input to webhook payload
//! - `cli` - command definitions and dispatch

pub mod cli;
pub mod container;
pub mod handlers;

pub use container::{ConfigError, ContainerError, RelayContainer, RuntimeConfig};
pub use handlers::{ScanReportHandler, SnsHandlerError, SnsNotificationHandler, SnsOutcome};
