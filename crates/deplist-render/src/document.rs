use crate::canonical::{Canonicalize, FsCanonicalizer};
use crate::fragment::format_artifact_with;
use deplist_types::{ArtifactRecord, OutputOptions, ids};

const TOP_LEVEL_INDENT: &str = "   ";
const ELEMENT_INDENT: &str = "    ";
const ELEMENT_SEPARATOR: char = ',';

/// Contents of the `artifacts` array region.
enum ArrayBody<'a> {
    Empty,
    Elements(Vec<&'a ArtifactRecord>),
}

impl<'a> From<Vec<&'a ArtifactRecord>> for ArrayBody<'a> {
    fn from(records: Vec<&'a ArtifactRecord>) -> Self {
        if records.is_empty() {
            ArrayBody::Empty
        } else {
            ArrayBody::Elements(records)
        }
    }
}

/// Assemble the resolved-dependencies document, canonicalizing files on the real filesystem.
pub fn assemble<'a, I>(records: I, options: &OutputOptions) -> String
where
    I: IntoIterator<Item = &'a ArtifactRecord>,
{
    assemble_with(records, options, &FsCanonicalizer)
}

/// Assemble the resolved-dependencies document.
///
/// Output is one element per input record, in input order or sorted by
/// `(groupId, artifactId, version)`, with no separator after the last element.
pub fn assemble_with<'a, I>(
    records: I,
    options: &OutputOptions,
    canonicalizer: &dyn Canonicalize,
) -> String
where
    I: IntoIterator<Item = &'a ArtifactRecord>,
{
    let ordered = order_records(records, options.sort_alphabetically);

    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!(
        "{TOP_LEVEL_INDENT}\"{}\": \"{}\",\n",
        ids::KEY_TYPE,
        ids::DOCUMENT_TYPE
    ));
    out.push_str(&format!(
        "{TOP_LEVEL_INDENT}\"{}\": [\n",
        ids::KEY_ARTIFACTS
    ));

    match ArrayBody::from(ordered) {
        ArrayBody::Empty => {}
        ArrayBody::Elements(records) => {
            for record in records {
                let fragment = format_artifact_with(
                    record,
                    options.include_absolute_path,
                    options.include_scope,
                    canonicalizer,
                );
                out.push_str(ELEMENT_INDENT);
                out.push_str(&fragment.render());
                out.push(ELEMENT_SEPARATOR);
                out.push('\n');
            }
            strip_trailing_separator(&mut out);
        }
    }

    out.push_str(TOP_LEVEL_INDENT);
    out.push_str("]\n");
    out.push_str("}\n");
    out
}

/// Apply the requested ordering. Sorting is stable: equal keys keep input order.
pub fn order_records<'a, I>(records: I, sort_alphabetically: bool) -> Vec<&'a ArtifactRecord>
where
    I: IntoIterator<Item = &'a ArtifactRecord>,
{
    let mut ordered: Vec<&ArtifactRecord> = records.into_iter().collect();
    if sort_alphabetically {
        ordered.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }
    ordered
}

/// Remove the separator written after the last element.
///
/// Only `\n` follows that separator, so the last one in the buffer is the stray one.
fn strip_trailing_separator(out: &mut String) {
    if let Some(idx) = out.rfind(ELEMENT_SEPARATOR) {
        out.remove(idx);
    }
}
