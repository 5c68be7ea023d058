use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parsed shape of a written resolved-dependencies file.
///
/// The writer never goes through this type (it produces text with a fixed layout); this model
/// exists for consumers that read the file back and for schema emission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ResolvedDependenciesDocument {
    /// Always `resolvedDependencies`.
    #[serde(rename = "type")]
    pub document_type: String,
    pub artifacts: Vec<ArtifactEntry>,
}

/// One artifact as it appears in the document. Field presence varies per entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArtifactEntry {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Canonical path of the resolved file, or the error text when canonicalization failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_with_varying_fields() {
        let doc: ResolvedDependenciesDocument = serde_json::from_str(
            r#"{
                "type": "resolvedDependencies",
                "artifacts": [
                    { "groupId":"g",  "artifactId":"a",  "version":"1",  "scope":"",  "type":"jar" },
                    { "groupId":"g",  "artifactId":"b",  "version":"2",  "type":"jar",  "classifier":"sources",  "file":"/x/b.jar" }
                ]
            }"#,
        )
        .expect("parse document");

        assert_eq!(doc.document_type, crate::ids::DOCUMENT_TYPE);
        assert_eq!(doc.artifacts.len(), 2);
        assert_eq!(doc.artifacts[0].scope.as_deref(), Some(""));
        assert_eq!(doc.artifacts[0].classifier, None);
        assert_eq!(doc.artifacts[1].scope, None);
        assert_eq!(doc.artifacts[1].file.as_deref(), Some("/x/b.jar"));
    }

    #[test]
    fn rejects_unknown_artifact_fields() {
        let err = serde_json::from_str::<ResolvedDependenciesDocument>(
            r#"{"type":"resolvedDependencies","artifacts":[{"groupId":"g","artifactId":"a","version":"1","type":"jar","extra":"x"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("extra"));
    }
}
