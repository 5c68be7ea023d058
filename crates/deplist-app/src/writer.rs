//! File writer: the single I/O boundary for the assembled document.

use crate::error::DocumentWriteError;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Create or truncate `destination` and write `content` to it.
///
/// Parent directories are not created. The handle is dropped on every path.
pub fn write_document(content: &str, destination: &Utf8Path) -> Result<(), DocumentWriteError> {
    let file = File::create(destination)
        .map_err(|source| DocumentWriteError::new(destination, "create", source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|source| DocumentWriteError::new(destination, "write", source))?;
    writer
        .flush()
        .map_err(|source| DocumentWriteError::new(destination, "flush", source))?;
    Ok(())
}

/// Fully assembled document bound to its destination.
///
/// Written at most once: [`SerializedDocument::write`] consumes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializedDocument {
    content: String,
    destination: Utf8PathBuf,
}

impl SerializedDocument {
    pub fn new(content: String, destination: Utf8PathBuf) -> Self {
        Self {
            content,
            destination,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn destination(&self) -> &Utf8Path {
        &self.destination
    }

    /// Write the document and return the canonical destination path.
    pub fn write(self) -> Result<Utf8PathBuf, DocumentWriteError> {
        write_document(&self.content, &self.destination)?;
        Ok(self
            .destination
            .canonicalize_utf8()
            .unwrap_or(self.destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn writes_content_exactly() {
        let tmp = TempDir::new().expect("temp dir");
        let dest = utf8_root(&tmp).join("deps.json");

        write_document("{}\n", &dest).expect("write");
        assert_eq!(std::fs::read_to_string(&dest).expect("read back"), "{}\n");
    }

    #[test]
    fn truncates_existing_file() {
        let tmp = TempDir::new().expect("temp dir");
        let dest = utf8_root(&tmp).join("deps.json");
        std::fs::write(&dest, "a much longer previous document body").expect("seed");

        write_document("short", &dest).expect("write");
        assert_eq!(std::fs::read_to_string(&dest).expect("read back"), "short");
    }

    #[test]
    fn missing_parent_directory_is_a_create_error() {
        let tmp = TempDir::new().expect("temp dir");
        let dest = utf8_root(&tmp).join("missing").join("deps.json");

        let err = write_document("{}", &dest).unwrap_err();
        assert_eq!(err.operation, "create");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.path, dest);
        assert!(err.to_string().contains("deps.json"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!dest.exists());
    }

    #[test]
    fn destination_that_is_a_directory_fails() {
        let tmp = TempDir::new().expect("temp dir");
        let dest = utf8_root(&tmp);

        let err = write_document("{}", &dest).unwrap_err();
        assert_eq!(err.operation, "create");
    }

    #[test]
    fn serialized_document_returns_canonical_path() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        std::fs::create_dir_all(root.join("out")).expect("create out");
        let dest = root.join("out/../out/deps.json");

        let doc = SerializedDocument::new("{}\n".to_string(), dest.clone());
        assert_eq!(doc.content(), "{}\n");
        assert_eq!(doc.destination(), dest.as_path());
        let written = doc.write().expect("write");

        assert!(written.is_absolute());
        assert!(!written.as_str().contains(".."));
        assert!(written.as_str().ends_with("out/deps.json"));
    }
}
