//! # SR-01 Signature Verification Benchmarks
//!
//! Covers the CPU-bound steps only: canonical string construction,
//! certificate parsing and RSA verification. The certificate fetch is
//! served from memory.

use criterion::{black_box, Criterion};
use sr_01_sns_verification::{
    string_to_sign, CertificateTrustPolicy, NotificationEnvelope, SignatureVerificationApi,
    SnsVerificationService, VerifierConfig,
};

use crate::fixtures::{StaticCertificateFetcher, BOUNCE_ENVELOPE};

pub fn bench_canonical_string(c: &mut Criterion) {
    let envelope = NotificationEnvelope::from_json(BOUNCE_ENVELOPE).expect("fixture parses");

    c.bench_function("sr-01/string_to_sign", |b| {
        b.iter(|| string_to_sign(black_box(&envelope)))
    });
}

pub fn bench_verify_notification(c: &mut Criterion) {
    let envelope = NotificationEnvelope::from_json(BOUNCE_ENVELOPE).expect("fixture parses");
    let service = SnsVerificationService::new(
        StaticCertificateFetcher::signing(),
        VerifierConfig::default().with_trust(CertificateTrustPolicy::any_host()),
    );
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime builds");

    c.bench_function("sr-01/verify_notification", |b| {
        b.iter(|| runtime.block_on(service.verify_signature(black_box(&envelope))))
    });
}
