/// Per-call switches for the document assembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Emit `file` with the canonical path when the artifact has a resolved file.
    pub include_absolute_path: bool,
    /// Emit `scope` for every artifact, even when it is empty.
    pub include_scope: bool,
    /// Order by `(groupId, artifactId, version)` instead of input order.
    pub sort_alphabetically: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            include_absolute_path: false,
            include_scope: true,
            sort_alphabetically: false,
        }
    }
}
