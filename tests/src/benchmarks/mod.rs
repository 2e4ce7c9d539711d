//! # Engine Benchmarks
//!
//! Criterion benchmark bodies, registered from `benches/engine_benchmarks.rs`.

pub mod sr_01_signature;
pub mod sr_02_extraction;
