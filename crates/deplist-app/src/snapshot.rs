//! Loading the resolver's result snapshot from JSON.

use anyhow::Context;
use camino::Utf8Path;
use deplist_types::ResultSnapshot;

/// Parse a snapshot (`{"resolved": [...], "unresolved": [...], "skipped": [...]}`).
///
/// Records with an empty `groupId`, `artifactId`, `version` or `type` are rejected here so the
/// formatter never sees them.
pub fn parse_snapshot_json(text: &str) -> anyhow::Result<ResultSnapshot> {
    let snapshot: ResultSnapshot =
        serde_json::from_str(text).context("parse result snapshot json")?;

    for (set, record) in snapshot.records() {
        let missing = record.missing_required_fields();
        if !missing.is_empty() {
            anyhow::bail!(
                "{set} artifact {record} has empty required field(s): {}",
                missing.join(", ")
            );
        }
    }

    Ok(snapshot)
}

pub fn load_snapshot(path: &Utf8Path) -> anyhow::Result<ResultSnapshot> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read snapshot: {}", path))?;
    parse_snapshot_json(&text).with_context(|| format!("load snapshot: {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use deplist_types::{ArtifactRecord, ArtifactSet};

    #[test]
    fn parses_all_sets() {
        let snapshot = parse_snapshot_json(
            r#"{
                "resolved": [
                    {"groupId":"org.example","artifactId":"core","version":"1.0","scope":"compile","type":"jar","file":"/repo/core-1.0.jar"}
                ],
                "unresolved": [
                    {"groupId":"org.example","artifactId":"missing","version":"0.1","type":"jar"}
                ],
                "skipped": []
            }"#,
        )
        .expect("parse snapshot");

        assert_eq!(
            snapshot.set(ArtifactSet::Resolved),
            &[ArtifactRecord::new("org.example", "core", "1.0", "jar")
                .with_scope("compile")
                .with_file("/repo/core-1.0.jar")]
        );
        assert_eq!(snapshot.set(ArtifactSet::Unresolved).len(), 1);
        assert!(snapshot.set(ArtifactSet::Skipped).is_empty());
    }

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        let snapshot = parse_snapshot_json("{}").expect("parse snapshot");
        assert_eq!(snapshot, ResultSnapshot::default());
    }

    #[test]
    fn rejects_record_with_empty_required_field() {
        let err = parse_snapshot_json(
            r#"{"skipped":[{"groupId":"g","artifactId":"a","version":"","type":"jar"}]}"#,
        )
        .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("skipped artifact"));
        assert!(text.contains("version"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_snapshot_json("[").unwrap_err();
        assert!(format!("{err:#}").contains("parse result snapshot json"));
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = camino::Utf8PathBuf::from_path_buf(tmp.path().join("snapshot.json"))
            .expect("utf8 path");
        let err = load_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("read snapshot"));
    }
}
