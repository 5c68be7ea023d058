//! Fuzz target for result snapshot parsing.
//!
//! Goal: the snapshot loader should **never panic** on any input.
//! Accepted snapshots must only hold records with every required field set.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_snapshot_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(snapshot) = deplist_app::parse_snapshot_json(text) {
            for (_, record) in snapshot.records() {
                assert!(record.missing_required_fields().is_empty());
            }
        }
    }
});
