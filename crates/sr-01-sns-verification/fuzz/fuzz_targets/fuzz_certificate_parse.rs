//! Fuzz target for certificate body handling.
//!
//! Fetched bodies are attacker-controlled when the trust policy is relaxed;
//! decoding them must fail cleanly.
//!
//! ## Running
//!
//! ```bash
//! cd crates/sr-01-sns-verification
//! cargo +nightly fuzz run fuzz_certificate_parse
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sr_01_sns_verification::domain::crypto::{leaf_certificate_pem, public_key_from_pem};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);

    if let Some(leaf) = leaf_certificate_pem(&body) {
        assert!(leaf.len() <= body.len());
    }
    let _ = public_key_from_pem(&body);
});
