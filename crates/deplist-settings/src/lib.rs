//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{DeplistConfigV1, OutputConfig};
pub use resolve::{Destination, Overrides, ResolvedConfig};

/// Parse `deplist.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DeplistConfigV1> {
    let cfg: DeplistConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + config file + overrides).
pub fn resolve_config(
    cfg: DeplistConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
