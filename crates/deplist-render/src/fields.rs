//! Field plan for one artifact fragment.
//!
//! Each rule is `(key, presence predicate, value thunk)`. Rules are evaluated in table order,
//! which is the on-disk field order.

use crate::canonical::Canonicalize;
use deplist_types::{ArtifactRecord, ids};

pub(crate) struct FieldContext<'a> {
    pub record: &'a ArtifactRecord,
    pub include_absolute_path: bool,
    pub include_scope: bool,
    pub canonicalizer: &'a dyn Canonicalize,
}

pub(crate) struct FieldRule {
    pub key: &'static str,
    pub present: fn(&FieldContext<'_>) -> bool,
    pub value: fn(&FieldContext<'_>) -> String,
}

pub(crate) const FIELD_RULES: [FieldRule; 7] = [
    FieldRule {
        key: ids::FIELD_GROUP_ID,
        present: always,
        value: |ctx| ctx.record.group_id.clone(),
    },
    FieldRule {
        key: ids::FIELD_ARTIFACT_ID,
        present: always,
        value: |ctx| ctx.record.artifact_id.clone(),
    },
    FieldRule {
        key: ids::FIELD_VERSION,
        present: always,
        value: |ctx| ctx.record.version.clone(),
    },
    FieldRule {
        key: ids::FIELD_SCOPE,
        present: |ctx| ctx.include_scope,
        value: |ctx| ctx.record.scope.clone(),
    },
    FieldRule {
        key: ids::FIELD_TYPE,
        present: always,
        value: |ctx| ctx.record.artifact_type.clone(),
    },
    FieldRule {
        key: ids::FIELD_CLASSIFIER,
        present: |ctx| ctx.record.has_classifier(),
        value: |ctx| ctx.record.classifier.clone(),
    },
    FieldRule {
        key: ids::FIELD_FILE,
        present: |ctx| ctx.include_absolute_path && ctx.record.file.is_some(),
        value: file_value,
    },
];

fn always(_: &FieldContext<'_>) -> bool {
    true
}

fn file_value(ctx: &FieldContext<'_>) -> String {
    let Some(path) = ctx.record.file() else {
        return String::new();
    };
    match ctx.canonicalizer.canonicalize(path) {
        Ok(canonical) => canonical.into_string(),
        Err(err) => {
            tracing::warn!(
                artifact = %ctx.record,
                error = %err,
                "embedding path error as file value"
            );
            err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_matches_document_layout() {
        let keys: Vec<&str> = FIELD_RULES.iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            vec![
                "groupId",
                "artifactId",
                "version",
                "scope",
                "type",
                "classifier",
                "file"
            ]
        );
    }
}
