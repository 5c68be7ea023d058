//! CLI entry point for deplist.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `deplist-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use deplist_app::{WriteInput, load_snapshot, render_document, run_write, verify_document};
use deplist_settings::{Overrides, ResolvedConfig};
use deplist_types::ids;
use logging::LogLevel;

#[derive(Parser, Debug)]
#[command(
    name = "deplist",
    version,
    about = "Write resolved dependency sets as a deterministic JSON document"
)]
struct Cli {
    /// Project directory (base for relative output directories and the config file).
    #[arg(long, default_value = ".")]
    project_dir: Utf8PathBuf,

    /// Path to deplist config TOML, relative to the project directory.
    #[arg(long, default_value = ids::DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Log level for stderr diagnostics (RUST_LOG takes precedence).
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Commands,
}

/// Snapshot input and document shaping flags shared by `write` and `print`.
#[derive(Args, Debug)]
struct SelectionArgs {
    /// Result snapshot JSON produced by the dependency resolver.
    #[arg(long)]
    snapshot: Utf8PathBuf,

    /// Artifact sets to include (resolved, unresolved, skipped).
    #[arg(long, value_delimiter = ',')]
    sets: Option<Vec<String>>,

    /// Include the canonical path of each resolved artifact file.
    #[arg(long)]
    absolute_paths: bool,

    /// Omit the scope field.
    #[arg(long)]
    no_scope: bool,

    /// Sort artifacts by groupId, artifactId, version.
    #[arg(long)]
    sort: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the resolved-dependencies document to its destination.
    Write {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory (default: target).
        #[arg(long)]
        output_dir: Option<Utf8PathBuf>,

        /// Output file name (default: ResolvedDependenciesFile.json).
        #[arg(long)]
        output_file: Option<String>,
    },

    /// Print the document to stdout instead of writing it.
    Print {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Parse an existing document and report its shape.
    Verify {
        /// Path to the document.
        #[arg(long)]
        document: Utf8PathBuf,
    },

    /// Print the JSON schema of the document.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level)?;

    match &cli.cmd {
        Commands::Write {
            selection,
            output_dir,
            output_file,
        } => cmd_write(&cli, selection, output_dir.clone(), output_file.clone()),
        Commands::Print { selection } => cmd_print(&cli, selection),
        Commands::Verify { document } => cmd_verify(document),
        Commands::Schema => cmd_schema(),
    }
}

fn overrides_from(selection: &SelectionArgs) -> Overrides {
    Overrides {
        include_absolute_path: selection.absolute_paths.then_some(true),
        include_scope: selection.no_scope.then_some(false),
        sort: selection.sort.then_some(true),
        sets: selection.sets.clone(),
        ..Overrides::default()
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn load_config(cli: &Cli, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg_path = cli.project_dir.join(&cli.config);
    let cfg = if cfg_path.exists() {
        let text = std::fs::read_to_string(&cfg_path)
            .with_context(|| format!("read config: {}", cfg_path))?;
        deplist_settings::parse_config_toml(&text)
            .with_context(|| format!("parse config: {}", cfg_path))?
    } else {
        tracing::debug!(path = %cfg_path, "no config file; using defaults");
        deplist_settings::DeplistConfigV1::default()
    };
    deplist_settings::resolve_config(cfg, overrides).context("resolve config")
}

fn cmd_write(
    cli: &Cli,
    selection: &SelectionArgs,
    output_dir: Option<Utf8PathBuf>,
    output_file: Option<String>,
) -> anyhow::Result<()> {
    let overrides = Overrides {
        directory: output_dir,
        file: output_file,
        ..overrides_from(selection)
    };
    let config = load_config(cli, overrides)?;
    let snapshot = load_snapshot(&selection.snapshot)?;

    let output = run_write(WriteInput {
        snapshot: &snapshot,
        config: &config,
        project_dir: &cli.project_dir,
    })
    .context("write resolved dependencies file")?;

    println!("Resolved dependencies file written to: {}", output.destination);
    Ok(())
}

fn cmd_print(cli: &Cli, selection: &SelectionArgs) -> anyhow::Result<()> {
    let config = load_config(cli, overrides_from(selection))?;
    let snapshot = load_snapshot(&selection.snapshot)?;
    print!("{}", render_document(&snapshot, &config));
    Ok(())
}

fn cmd_verify(document: &Utf8Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(document)
        .with_context(|| format!("read document: {}", document))?;
    let summary = verify_document(&text).with_context(|| format!("verify {}", document))?;

    println!("{}: ok", document);
    println!("  artifacts: {}", summary.artifacts);
    println!("  with scope: {}", summary.with_scope);
    println!("  with classifier: {}", summary.with_classifier);
    println!("  with file: {}", summary.with_file);
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(deplist_types::ResolvedDependenciesDocument);
    let json = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{}", json);
    Ok(())
}
