//! Shared test utilities for the deplist workspace.
//!
//! This crate exists because `xtask` needs `normalize_file_paths` at runtime
//! (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `deplist-types` would not suffice.

use serde_json::Value;

/// Placeholder substituted for the machine-specific root of a `file` value.
pub const ROOT_PLACEHOLDER: &str = "__ROOT__";

/// Placeholder substituted for the OS-specific tail of a canonicalization error.
pub const IO_ERROR_PLACEHOLDER: &str = "__IO_ERROR__";

const PATH_ERROR_PREFIX: &str = "cannot canonicalize ";

/// Normalize machine-specific `file` values for golden-file comparison.
///
/// Only the `file` key of each element of the root `artifacts` array is touched:
///
/// 1. A canonical path under `root` has that prefix replaced with `"__ROOT__"`
///    and its separators folded to `/`.
/// 2. An embedded canonicalization error keeps the offending path but has the
///    OS error text replaced with `"__IO_ERROR__"`.
pub fn normalize_file_paths(mut value: Value, root: &str) -> Value {
    let Some(artifacts) = value.get_mut("artifacts").and_then(Value::as_array_mut) else {
        return value;
    };
    for entry in artifacts {
        if let Some(Value::String(file)) = entry.get_mut("file") {
            *file = normalize_file_value(file, root);
        }
    }
    value
}

fn normalize_file_value(file: &str, root: &str) -> String {
    if let Some(rest) = file.strip_prefix(PATH_ERROR_PREFIX) {
        // The offending path itself never contains ": " in fixtures.
        let path = rest.split_once(": ").map_or(rest, |(path, _)| path);
        return format!("{PATH_ERROR_PREFIX}{path}: {IO_ERROR_PLACEHOLDER}");
    }
    let root = root.trim_end_matches(['/', '\\']);
    match file.strip_prefix(root) {
        Some(rest) if !root.is_empty() => {
            format!("{ROOT_PLACEHOLDER}{}", rest.replace('\\', "/"))
        }
        _ => file.to_string(),
    }
}
