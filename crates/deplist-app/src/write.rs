//! The `write` use case: select, assemble, and write the document to its destination.

use crate::error::DocumentWriteError;
use crate::render::select_records;
use crate::writer::SerializedDocument;
use camino::{Utf8Path, Utf8PathBuf};
use deplist_settings::ResolvedConfig;
use deplist_types::ResultSnapshot;

/// Input for the write use case.
#[derive(Clone, Debug)]
pub struct WriteInput<'a> {
    /// Snapshot produced by the upstream resolver.
    pub snapshot: &'a ResultSnapshot,
    /// Resolved options, destination and set selection.
    pub config: &'a ResolvedConfig,
    /// Base for a relative destination directory.
    pub project_dir: &'a Utf8Path,
}

/// Output from the write use case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOutput {
    /// Canonical path of the written file.
    pub destination: Utf8PathBuf,
    pub artifacts_written: usize,
}

/// Run the write use case.
///
/// The document is fully assembled in memory before the single write; a failed write is
/// returned to the caller untouched.
pub fn run_write(input: WriteInput<'_>) -> Result<WriteOutput, DocumentWriteError> {
    let records = select_records(input.snapshot, input.config);
    let artifacts_written = records.len();
    let content = deplist_render::assemble(records, &input.config.options);
    let destination = input
        .config
        .destination
        .resolve_against(input.project_dir);

    let written = SerializedDocument::new(content, destination).write()?;
    tracing::info!(
        path = %written,
        artifacts = artifacts_written,
        "Resolved dependencies file written"
    );

    Ok(WriteOutput {
        destination: written,
        artifacts_written,
    })
}
