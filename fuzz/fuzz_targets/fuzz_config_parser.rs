//! Fuzz target for `deplist.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! A resolved config always selects at least one artifact set.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = deplist_settings::parse_config_toml(text) {
            if let Ok(resolved) = deplist_settings::resolve_config(cfg, Default::default()) {
                assert!(!resolved.sets.is_empty());
                assert!(!resolved.destination.file_name.contains('/'));
            }
        }
    }
});
