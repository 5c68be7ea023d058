use camino::{Utf8Path, Utf8PathBuf};

/// Resolves a path to its absolute, symlink-free form.
pub trait Canonicalize {
    fn canonicalize(&self, path: &Utf8Path) -> Result<Utf8PathBuf, PathResolutionError>;
}

/// Canonicalizes against the real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsCanonicalizer;

impl Canonicalize for FsCanonicalizer {
    fn canonicalize(&self, path: &Utf8Path) -> Result<Utf8PathBuf, PathResolutionError> {
        path.canonicalize_utf8()
            .map_err(|source| PathResolutionError::new(path, source))
    }
}

/// Canonicalizing one artifact's file failed.
///
/// Never fatal: the display text is embedded as that artifact's `file` value.
#[derive(Debug, thiserror::Error)]
#[error("cannot canonicalize {path}: {source}")]
pub struct PathResolutionError {
    pub path: Utf8PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl PathResolutionError {
    pub fn new(path: &Utf8Path, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}
