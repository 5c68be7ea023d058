//! The `verify` use case: read a written document back with a generic JSON parser.

use anyhow::Context;
use deplist_types::{ResolvedDependenciesDocument, ids};

/// Shape of a parsed document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentSummary {
    pub artifacts: usize,
    pub with_scope: usize,
    pub with_classifier: usize,
    pub with_file: usize,
}

pub fn verify_document(text: &str) -> anyhow::Result<DocumentSummary> {
    let doc: ResolvedDependenciesDocument =
        serde_json::from_str(text).context("parse resolved dependencies document")?;

    if doc.document_type != ids::DOCUMENT_TYPE {
        anyhow::bail!(
            "unexpected document type: {} (expected {})",
            doc.document_type,
            ids::DOCUMENT_TYPE
        );
    }

    let mut summary = DocumentSummary {
        artifacts: doc.artifacts.len(),
        ..DocumentSummary::default()
    };
    for entry in &doc.artifacts {
        summary.with_scope += usize::from(entry.scope.is_some());
        summary.with_classifier += usize::from(entry.classifier.is_some());
        summary.with_file += usize::from(entry.file.is_some());
    }
    Ok(summary)
}
