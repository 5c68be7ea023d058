//! Render use case: selected artifact sets to document text, without touching the destination.

use deplist_settings::ResolvedConfig;
use deplist_types::{ArtifactRecord, ResultSnapshot};

/// Union of the configured sets, in configured set order.
pub fn select_records<'a>(
    snapshot: &'a ResultSnapshot,
    config: &ResolvedConfig,
) -> Vec<&'a ArtifactRecord> {
    let counts = snapshot.counts();
    let selected = snapshot.select(&config.sets);
    tracing::debug!(
        resolved = counts.resolved,
        unresolved = counts.unresolved,
        skipped = counts.skipped,
        sets = ?config.sets,
        selected = selected.len(),
        "selected artifacts for serialization"
    );
    selected
}

pub fn render_document(snapshot: &ResultSnapshot, config: &ResolvedConfig) -> String {
    let records = select_records(snapshot, config);
    deplist_render::assemble(records, &config.options)
}
