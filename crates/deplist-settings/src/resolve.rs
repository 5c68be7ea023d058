use crate::model::DeplistConfigV1;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use deplist_types::{ArtifactSet, OutputOptions, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub directory: Option<Utf8PathBuf>,
    pub file: Option<String>,
    pub include_absolute_path: Option<bool>,
    pub include_scope: Option<bool>,
    pub sort: Option<bool>,
    pub sets: Option<Vec<String>>,
}

/// Where the document goes: directory + file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub directory: Utf8PathBuf,
    pub file_name: String,
}

impl Default for Destination {
    fn default() -> Self {
        Self {
            directory: Utf8PathBuf::from(ids::DEFAULT_OUTPUT_DIR),
            file_name: ids::DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Destination {
    pub fn path(&self) -> Utf8PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Destination path with a relative directory taken from `base`.
    pub fn resolve_against(&self, base: &Utf8Path) -> Utf8PathBuf {
        if self.directory.is_absolute() {
            self.path()
        } else {
            base.join(&self.directory).join(&self.file_name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub options: OutputOptions,
    pub destination: Destination,
    pub sets: Vec<ArtifactSet>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            options: OutputOptions::default(),
            destination: Destination::default(),
            sets: vec![ArtifactSet::Resolved],
        }
    }
}

pub fn resolve_config(
    cfg: DeplistConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    // Options
    let output = cfg.output;
    if let Some(v) = overrides
        .include_absolute_path
        .or(output.include_absolute_path)
    {
        resolved.options.include_absolute_path = v;
    }
    if let Some(v) = overrides.include_scope.or(output.include_scope) {
        resolved.options.include_scope = v;
    }
    if let Some(v) = overrides.sort.or(output.sort) {
        resolved.options.sort_alphabetically = v;
    }

    // Destination
    if let Some(dir) = overrides
        .directory
        .or_else(|| output.directory.map(Utf8PathBuf::from))
    {
        if dir.as_str().trim().is_empty() {
            anyhow::bail!("output directory must not be empty");
        }
        resolved.destination.directory = dir;
    }
    if let Some(file) = overrides.file.or(output.file) {
        validate_file_name(&file)?;
        resolved.destination.file_name = file;
    }

    // Sets
    if let Some(names) = overrides.sets.or(cfg.sets) {
        resolved.sets = parse_sets(&names).context("invalid artifact set selection")?;
    }

    Ok(resolved)
}

fn validate_file_name(file: &str) -> anyhow::Result<()> {
    if file.trim().is_empty() {
        anyhow::bail!("output file name must not be empty");
    }
    if file.contains('/') || file.contains('\\') {
        anyhow::bail!("output file name must not contain path separators: {file}");
    }
    Ok(())
}

/// Parse set names, dropping repeats (first position wins).
fn parse_sets(names: &[String]) -> anyhow::Result<Vec<ArtifactSet>> {
    let mut sets = Vec::new();
    for name in names {
        let set: ArtifactSet = name.parse()?;
        if !sets.contains(&set) {
            sets.push(set);
        }
    }
    if sets.is_empty() {
        anyhow::bail!("at least one artifact set must be selected");
    }
    Ok(sets)
}
