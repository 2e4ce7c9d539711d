//! Fuzz target for envelope parsing and canonicalization.
//!
//! ## Running
//!
//! ```bash
//! cd crates/sr-01-sns-verification
//! cargo +nightly fuzz run fuzz_canonical_string
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sr_01_sns_verification::{string_to_sign, NotificationEnvelope};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(envelope) = NotificationEnvelope::from_json(body) else {
        return;
    };

    // Must never panic, and must be deterministic
    let first = string_to_sign(&envelope);
    let second = string_to_sign(&envelope);
    assert_eq!(first, second);

    if let Ok(canonical) = first {
        assert!(canonical.ends_with('\n'));
        assert!(canonical.starts_with("Message\n"));
    }
});
