//! Stable DTOs and IDs used across the deplist workspace.
//!
//! This crate is intentionally boring:
//! - the artifact record handed over by an upstream resolver
//! - the immutable result snapshot and its named sets
//! - output options for the document writer
//! - the parsed shape of a written resolved-dependencies document
//! - stable string IDs (document type, default file name, field keys)

#![forbid(unsafe_code)]

pub mod artifact;
pub mod document;
pub mod ids;
pub mod options;
pub mod snapshot;

pub use artifact::ArtifactRecord;
pub use document::{ArtifactEntry, ResolvedDependenciesDocument};
pub use options::OutputOptions;
pub use snapshot::{ArtifactSet, ResultSnapshot, SetCounts, UnknownArtifactSet};
