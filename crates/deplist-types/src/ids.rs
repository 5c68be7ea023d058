//! Stable identifiers for the resolved-dependencies document.
//!
//! Changing any of these is a breaking change for consumers that parse the file positionally.

/// Value of the top-level `type` discriminator.
pub const DOCUMENT_TYPE: &str = "resolvedDependencies";

pub const DEFAULT_FILE_NAME: &str = "ResolvedDependenciesFile.json";
pub const DEFAULT_OUTPUT_DIR: &str = "target";
pub const DEFAULT_CONFIG_FILE: &str = "deplist.toml";

pub const SCHEMA_CONFIG_V1: &str = "deplist.config.v1";

// Top-level keys
pub const KEY_TYPE: &str = "type";
pub const KEY_ARTIFACTS: &str = "artifacts";

// Artifact fragment keys, in emission order.
pub const FIELD_GROUP_ID: &str = "groupId";
pub const FIELD_ARTIFACT_ID: &str = "artifactId";
pub const FIELD_VERSION: &str = "version";
pub const FIELD_SCOPE: &str = "scope";
pub const FIELD_TYPE: &str = "type";
pub const FIELD_CLASSIFIER: &str = "classifier";
pub const FIELD_FILE: &str = "file";
