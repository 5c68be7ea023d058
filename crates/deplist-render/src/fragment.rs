use crate::canonical::{Canonicalize, FsCanonicalizer};
use crate::fields::{FIELD_RULES, FieldContext};
use deplist_types::ArtifactRecord;

/// Serialized representation of one artifact, before assembly into the document.
///
/// Holds the emitted `(key, value)` pairs in document order. The element separator is not
/// part of the fragment; the assembler owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    fields: Vec<(&'static str, String)>,
}

impl Fragment {
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(k, _)| *k).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `{ "groupId":"g",  "artifactId":"a",  ... }`
    pub fn render(&self) -> String {
        let body = self
            .fields
            .iter()
            .map(|(key, value)| format!("{}:{}", quote(key), quote(value)))
            .collect::<Vec<_>>()
            .join(",  ");
        format!("{{ {} }}", body)
    }
}

/// Format one artifact, canonicalizing `file` against the real filesystem.
pub fn format_artifact(
    record: &ArtifactRecord,
    include_absolute_path: bool,
    include_scope: bool,
) -> Fragment {
    format_artifact_with(
        record,
        include_absolute_path,
        include_scope,
        &FsCanonicalizer,
    )
}

/// Format one artifact with a caller-supplied canonicalizer.
///
/// Never fails: a canonicalization error becomes the `file` value.
pub fn format_artifact_with(
    record: &ArtifactRecord,
    include_absolute_path: bool,
    include_scope: bool,
    canonicalizer: &dyn Canonicalize,
) -> Fragment {
    let ctx = FieldContext {
        record,
        include_absolute_path,
        include_scope,
        canonicalizer,
    };

    let fields = FIELD_RULES
        .iter()
        .filter(|rule| (rule.present)(&ctx))
        .map(|rule| (rule.key, (rule.value)(&ctx)))
        .collect();

    Fragment { fields }
}

/// JSON string literal for `value` (quotes, backslashes and control characters escaped).
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
