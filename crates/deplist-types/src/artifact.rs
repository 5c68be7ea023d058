use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One dependency as classified by the upstream resolver.
///
/// `group_id`, `artifact_id`, `version` and `artifact_type` are expected to be non-empty.
/// Empty `scope` means "unspecified", empty `classifier` means "absent".
/// `file` is only present when the artifact was resolved to a location on disk.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default)]
    pub scope: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default)]
    pub classifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Utf8PathBuf>,
}

impl ArtifactRecord {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        artifact_type: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: String::new(),
            artifact_type: artifact_type.into(),
            classifier: String::new(),
            file: None,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_file(mut self, file: impl Into<Utf8PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn file(&self) -> Option<&Utf8Path> {
        self.file.as_deref()
    }

    pub fn has_classifier(&self) -> bool {
        !self.classifier.is_empty()
    }

    /// Key for alphabetical ordering: `(groupId, artifactId, version)`.
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (&self.group_id, &self.artifact_id, &self.version)
    }

    /// Identity used when merging overlapping sets. Scope and file do not participate.
    pub fn identity(&self) -> (&str, &str, &str, &str, &str) {
        (
            &self.group_id,
            &self.artifact_id,
            &self.version,
            &self.artifact_type,
            &self.classifier,
        )
    }

    /// Names of the required fields that are empty.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.group_id.is_empty() {
            missing.push(crate::ids::FIELD_GROUP_ID);
        }
        if self.artifact_id.is_empty() {
            missing.push(crate::ids::FIELD_ARTIFACT_ID);
        }
        if self.version.is_empty() {
            missing.push(crate::ids::FIELD_VERSION);
        }
        if self.artifact_type.is_empty() {
            missing.push(crate::ids::FIELD_TYPE);
        }
        missing
    }
}

/// Maven-style coordinate: `group:artifact:type[:classifier]:version[:scope]`.
impl fmt::Display for ArtifactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id, self.artifact_id, self.artifact_type
        )?;
        if self.has_classifier() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)?;
        if !self.scope.is_empty() {
            write!(f, ":{}", self.scope)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_optional_parts_only_when_set() {
        let plain = ArtifactRecord::new("org.example", "lib", "1.0", "jar");
        assert_eq!(plain.to_string(), "org.example:lib:jar:1.0");

        let full = ArtifactRecord::new("org.example", "lib", "1.0", "jar")
            .with_classifier("sources")
            .with_scope("test");
        assert_eq!(full.to_string(), "org.example:lib:jar:sources:1.0:test");
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let record: ArtifactRecord = serde_json::from_str(
            r#"{"groupId":"g","artifactId":"a","version":"1","type":"pom"}"#,
        )
        .expect("parse record");

        assert_eq!(record, ArtifactRecord::new("g", "a", "1", "pom"));
        assert!(record.file().is_none());
        assert!(!record.has_classifier());
    }

    #[test]
    fn file_round_trips_through_json() {
        let record = ArtifactRecord::new("g", "a", "1", "jar").with_file("/repo/a-1.jar");
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["file"], "/repo/a-1.jar");
        assert_eq!(json["type"], "jar");

        let back: ArtifactRecord = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, record);
    }

    #[test]
    fn identity_ignores_scope_and_file() {
        let a = ArtifactRecord::new("g", "a", "1", "jar").with_scope("compile");
        let b = ArtifactRecord::new("g", "a", "1", "jar")
            .with_scope("test")
            .with_file("/tmp/a.jar");
        assert_eq!(a.identity(), b.identity());

        let c = a.clone().with_classifier("tests");
        assert_ne!(a.identity(), c.identity());
    }

    #[test]
    fn missing_required_fields_lists_empty_ones() {
        let record = ArtifactRecord::new("", "a", "", "jar");
        assert_eq!(record.missing_required_fields(), vec!["groupId", "version"]);
        assert!(
            ArtifactRecord::new("g", "a", "1", "jar")
                .missing_required_fields()
                .is_empty()
        );
    }
}
