//! # Integration Flows
//!
//! End-to-end paths through `relay-runtime` with real engines. The SNS
//! flow also exercises the reqwest certificate fetcher against a local
//! HTTP server.

pub mod scan_report_flow;
pub mod sns_flow;
