//! # Signal Relay Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per engine
//! │   ├── sr_01_signature.rs
//! │   └── sr_02_extraction.rs
//! │
//! ├── fixtures.rs       # Signed envelopes, certificates and reports
//! │
//! └── integration/      # Cross-crate flows through the runtime
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sr-tests
//!
//! # Flows only
//! cargo test -p sr-tests integration::
//!
//! # Benchmarks
//! cargo bench -p sr-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
