//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        parent.to_path_buf()
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the tests/fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the ResolvedDependenciesDocument schema.
fn generate_document_schema() -> schemars::Schema {
    schema_for!(deplist_types::ResolvedDependenciesDocument)
}

/// Generate the DeplistConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(deplist_settings::DeplistConfigV1)
}

const DOCUMENT_SCHEMA_FILE: &str = "deplist.document.v1.json";
const CONFIG_SCHEMA_FILE: &str = "deplist.config.v1.json";

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: DOCUMENT_SCHEMA_FILE,
            generate: generate_document_schema,
        },
        SchemaSpec {
            filename: CONFIG_SCHEMA_FILE,
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Compile a generated schema for validation.
fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture documents and configs against the schemas");
    eprintln!("  conform-full      conform + run the deplist binary on every fixture");
}

fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let dir = fixtures_dir();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn fixture_name(dir: &Path) -> String {
    dir.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Validate fixture conformance.
///
/// This checks:
/// 1. Every fixture's expected.json validates against the document schema
/// 2. Every fixture's deplist.toml parses and validates against the config schema
fn conform() -> anyhow::Result<()> {
    let document = compile(&generate_document_schema())?;
    let config = compile(&generate_config_schema())?;
    println!("✓ document and config schemas compile");

    let mut errors = Vec::new();
    let mut count = 0;

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);

        let expected_path = dir.join("expected.json");
        match fs::read_to_string(&expected_path) {
            Ok(text) => match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(value) => {
                    for err in document.iter_errors(&value) {
                        errors.push(format!("fixture '{}': expected.json: {}", name, err));
                    }
                }
                Err(e) => errors.push(format!("fixture '{}': expected.json: {}", name, e)),
            },
            Err(e) => errors.push(format!("fixture '{}': expected.json: {}", name, e)),
        }

        let config_path = dir.join(deplist_types::ids::DEFAULT_CONFIG_FILE);
        if config_path.exists() {
            let text = fs::read_to_string(&config_path)?;
            match deplist_settings::parse_config_toml(&text) {
                Ok(cfg) => {
                    let value = serde_json::to_value(&cfg)?;
                    for err in config.iter_errors(&value) {
                        errors.push(format!("fixture '{}': deplist.toml: {}", name, err));
                    }
                }
                Err(e) => errors.push(format!("fixture '{}': deplist.toml: {:#}", name, e)),
            }
        }

        count += 1;
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("✓ {} fixtures conform", count);
    Ok(())
}

const WRITTEN_PREFIX: &str = "Resolved dependencies file written to: ";

/// Full conformance: run the built deplist binary on every fixture and compare with
/// expected.json after `file` normalization.
fn conform_full() -> anyhow::Result<()> {
    conform()?;

    println!("\n--- Full conformance: deplist binary output ---\n");

    let deplist_bin = project_root().join("target").join("debug").join("deplist");

    #[cfg(target_os = "windows")]
    let deplist_bin = deplist_bin.with_extension("exe");

    if !deplist_bin.exists() {
        bail!(
            "deplist binary not found at {}.\n\
            Run `cargo build -p deplist-cli` first.",
            deplist_bin.display()
        );
    }

    let mut errors = Vec::new();

    for fixture_dir in fixture_dirs()? {
        let name = fixture_name(&fixture_dir);
        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;

        let output = std::process::Command::new(&deplist_bin)
            .current_dir(&fixture_dir)
            .arg("--project-dir")
            .arg(&fixture_dir)
            .arg("write")
            .arg("--snapshot")
            .arg(fixture_dir.join("snapshot.json"))
            .arg("--output-dir")
            .arg(temp_dir.path())
            .output()
            .with_context(|| format!("Failed to run deplist on fixture '{}'", name))?;

        if !output.status.success() {
            errors.push(format!(
                "fixture '{}': deplist exited with {:?}: {}",
                name,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let Some(written) = stdout
            .lines()
            .find_map(|line| line.strip_prefix(WRITTEN_PREFIX))
        else {
            errors.push(format!("fixture '{}': no destination line on stdout", name));
            continue;
        };
        let written_text = fs::read_to_string(written)
            .with_context(|| format!("Failed to read document for fixture '{}'", name))?;
        let actual: serde_json::Value = serde_json::from_str(&written_text)
            .with_context(|| format!("Failed to parse document for fixture '{}'", name))?;
        let expected_text = fs::read_to_string(fixture_dir.join("expected.json"))?;
        let expected: serde_json::Value = serde_json::from_str(&expected_text)?;

        let root = fixture_dir
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize fixture '{}'", name))?;
        let normalized = deplist_test_util::normalize_file_paths(actual, &root.to_string_lossy());

        if normalized != expected {
            errors.push(format!("fixture '{}': output differs from expected.json", name));
        } else {
            println!("  ✓ fixture '{}' matches expected.json", name);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nFull conformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!(
            "Full conformance validation failed with {} errors",
            errors.len()
        );
    }

    println!("\n✓ Full conformance checks passed!");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "conform-full" => conform_full(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
