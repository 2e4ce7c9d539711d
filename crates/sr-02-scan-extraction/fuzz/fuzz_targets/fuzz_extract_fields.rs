//! Fuzz target for report field extraction.
//!
//! ## Running
//!
//! ```bash
//! cd crates/sr-02-scan-extraction
//! cargo +nightly fuzz run fuzz_extract_fields
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sr_02_scan_extraction::extract_fields;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let fields = extract_fields(&text);

    // Counts always lead, limits always hold
    assert!(fields.len() >= 2 && fields.len() <= 25);
    assert_eq!(fields[0].name(), "Warnings");
    assert_eq!(fields[1].name(), "Errors");
    for field in &fields {
        assert!(field.value().chars().count() <= 1024);
    }
});
