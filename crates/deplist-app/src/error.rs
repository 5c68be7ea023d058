use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// The document could not be written to its destination.
///
/// Fatal to the invocation. Not retried.
#[derive(Debug, Error)]
#[error("failed to {operation} resolved dependencies file {path}")]
pub struct DocumentWriteError {
    /// Destination that was being written.
    pub path: Utf8PathBuf,
    /// Step that failed: `create`, `write` or `flush`.
    pub operation: &'static str,
    #[source]
    pub source: std::io::Error,
}

impl DocumentWriteError {
    pub fn new(path: &Utf8Path, operation: &'static str, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }
}
