//! # Signal Relay Engine Benchmarks
//!
//! | Engine | Hot path |
//! |--------|----------|
//! | sr-01 SNS Verification | canonical string, RSA verify |
//! | sr-02 Scan Extraction | pipeline over an rkhunter report |

use criterion::{criterion_group, criterion_main};
use sr_tests::benchmarks::{sr_01_signature, sr_02_extraction};

criterion_group!(
    sr_01,
    sr_01_signature::bench_canonical_string,
    sr_01_signature::bench_verify_notification
);
criterion_group!(
    sr_02,
    sr_02_extraction::bench_extract_fixture,
    sr_02_extraction::bench_extract_scaled
);
criterion_main!(sr_01, sr_02);
