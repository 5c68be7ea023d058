use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `deplist.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeplistConfigV1 {
    /// Optional schema string for tooling (`deplist.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Artifact sets to serialize: `resolved`, `unresolved`, `skipped`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<Vec<String>>,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory the document is written to. Relative paths are taken from the project directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    /// File name of the document (no path separators).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Emit the canonical path of each resolved artifact file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_absolute_path: Option<bool>,

    /// Emit the scope of every artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_scope: Option<bool>,

    /// Order artifacts by groupId, artifactId, version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<bool>,
}
