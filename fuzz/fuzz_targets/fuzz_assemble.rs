//! Fuzz target for document assembly.
//!
//! Goal: for any records and options, the assembled document must parse as JSON and hold
//! exactly one element per record, with no separator after the last one.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_assemble
//! ```

#![no_main]

use arbitrary::Arbitrary;
use camino::{Utf8Path, Utf8PathBuf};
use deplist_render::{Canonicalize, PathResolutionError};
use deplist_types::{ArtifactRecord, OutputOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzRecord {
    group_id: String,
    artifact_id: String,
    version: String,
    scope: String,
    artifact_type: String,
    classifier: String,
    file: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    records: Vec<FuzzRecord>,
    include_absolute_path: bool,
    include_scope: bool,
    sort_alphabetically: bool,
}

/// Paths containing `!` fail; everything else resolves under `/fuzz`.
struct Flaky;

impl Canonicalize for Flaky {
    fn canonicalize(&self, path: &Utf8Path) -> Result<Utf8PathBuf, PathResolutionError> {
        if path.as_str().contains('!') {
            Err(PathResolutionError::new(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "fuzz"),
            ))
        } else {
            Ok(Utf8PathBuf::from("/fuzz").join(path))
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let records: Vec<ArtifactRecord> = input
        .records
        .into_iter()
        .map(|r| {
            let mut record =
                ArtifactRecord::new(r.group_id, r.artifact_id, r.version, r.artifact_type)
                    .with_scope(r.scope)
                    .with_classifier(r.classifier);
            if let Some(file) = r.file {
                record = record.with_file(file);
            }
            record
        })
        .collect();

    let options = OutputOptions {
        include_absolute_path: input.include_absolute_path,
        include_scope: input.include_scope,
        sort_alphabetically: input.sort_alphabetically,
    };

    let doc = deplist_render::assemble_with(&records, &options, &Flaky);
    let value: serde_json::Value =
        serde_json::from_str(&doc).expect("assembled document must be valid JSON");
    let artifacts = value["artifacts"].as_array().expect("artifacts array");
    assert_eq!(artifacts.len(), records.len());
    assert!(doc.ends_with("   ]\n}\n"));
});
