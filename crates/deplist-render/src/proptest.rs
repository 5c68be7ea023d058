//! Property-based tests for the document assembler.
//!
//! These tests use proptest to verify invariants around:
//! - one array element per input record, for any input
//! - syntactic validity (the output always parses as JSON)
//! - sort order and optional-field presence rules

use crate::canonical::{Canonicalize, PathResolutionError};
use crate::document::assemble_with;
use camino::{Utf8Path, Utf8PathBuf};
use deplist_types::{ArtifactRecord, OutputOptions, ids};
use proptest::prelude::*;
use serde_json::Value;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Maven-ish identifiers.
fn arb_ident() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9.-]{0,15}").unwrap()
}

/// Free text including quotes, backslashes and control characters.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        arb_ident(),
        any::<String>(),
        Just("with \"quotes\" and \\slashes\\".to_string()),
        Just("tab\tnewline\n".to_string()),
    ]
}

fn arb_record() -> impl Strategy<Value = ArtifactRecord> {
    (
        arb_ident(),
        arb_ident(),
        arb_ident(),
        arb_text(),
        arb_ident(),
        arb_text(),
        prop::option::of(arb_text()),
    )
        .prop_map(|(g, a, v, scope, t, classifier, file)| {
            let mut record = ArtifactRecord::new(g, a, v, t)
                .with_scope(scope)
                .with_classifier(classifier);
            record.file = file.map(Utf8PathBuf::from);
            record
        })
}

fn arb_options() -> impl Strategy<Value = OutputOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(abs, scope, sort)| OutputOptions {
        include_absolute_path: abs,
        include_scope: scope,
        sort_alphabetically: sort,
    })
}

/// Canonicalizer that fails for paths containing `!` and otherwise prefixes `/root`.
struct Flaky;

impl Canonicalize for Flaky {
    fn canonicalize(&self, path: &Utf8Path) -> Result<Utf8PathBuf, PathResolutionError> {
        if path.as_str().contains('!') {
            Err(PathResolutionError::new(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        } else {
            Ok(Utf8PathBuf::from("/root").join(path))
        }
    }
}

fn artifacts(doc: &str) -> Vec<Value> {
    let value: Value = serde_json::from_str(doc).expect("document should parse");
    assert_eq!(value[ids::KEY_TYPE], ids::DOCUMENT_TYPE);
    value[ids::KEY_ARTIFACTS]
        .as_array()
        .cloned()
        .expect("artifacts should be an array")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn one_element_per_record_and_always_parses(
        records in prop::collection::vec(arb_record(), 0..12),
        options in arb_options(),
    ) {
        let doc = assemble_with(&records, &options, &Flaky);
        prop_assert_eq!(artifacts(&doc).len(), records.len());
        prop_assert!(!doc.contains(",\n   ]"));
    }

    #[test]
    fn sorted_output_is_non_decreasing(
        records in prop::collection::vec(arb_record(), 0..12),
    ) {
        let options = OutputOptions { sort_alphabetically: true, ..OutputOptions::default() };
        let doc = assemble_with(&records, &options, &Flaky);

        let keys: Vec<(String, String, String)> = artifacts(&doc)
            .iter()
            .map(|a| (
                a["groupId"].as_str().unwrap_or_default().to_string(),
                a["artifactId"].as_str().unwrap_or_default().to_string(),
                a["version"].as_str().unwrap_or_default().to_string(),
            ))
            .collect();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{:?} > {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn scope_presence_follows_flag(
        records in prop::collection::vec(arb_record(), 1..8),
        include_scope in any::<bool>(),
    ) {
        let options = OutputOptions { include_scope, ..OutputOptions::default() };
        let doc = assemble_with(&records, &options, &Flaky);

        for artifact in artifacts(&doc) {
            prop_assert_eq!(artifact.get("scope").is_some(), include_scope);
        }
    }

    #[test]
    fn file_presence_follows_flag_and_record(
        records in prop::collection::vec(arb_record(), 1..8),
    ) {
        let options = OutputOptions { include_absolute_path: true, ..OutputOptions::default() };
        let doc = assemble_with(&records, &options, &Flaky);

        for (record, artifact) in records.iter().zip(artifacts(&doc)) {
            match record.file() {
                None => prop_assert!(artifact.get("file").is_none()),
                Some(path) => {
                    let value = artifact["file"].as_str().expect("file is a string");
                    prop_assert!(!value.is_empty());
                    if path.as_str().contains('!') {
                        prop_assert!(value.starts_with("cannot canonicalize"));
                    } else {
                        prop_assert!(Utf8Path::new(value).is_absolute());
                    }
                }
            }
        }
    }

    #[test]
    fn classifier_presence_follows_record(
        records in prop::collection::vec(arb_record(), 1..8),
        options in arb_options(),
    ) {
        let options = OutputOptions { sort_alphabetically: false, ..options };
        let doc = assemble_with(&records, &options, &Flaky);

        for (record, artifact) in records.iter().zip(artifacts(&doc)) {
            prop_assert_eq!(artifact.get("classifier").is_some(), record.has_classifier());
        }
    }
}
