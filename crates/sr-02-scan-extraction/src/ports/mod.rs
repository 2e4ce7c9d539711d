//! # Ports Layer
//!
//! Extraction has no driven dependencies, so only the inbound API exists.

pub mod inbound;
