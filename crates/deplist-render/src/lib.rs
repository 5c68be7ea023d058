//! Rendering of artifact records into the resolved-dependencies document.
//!
//! Two layers:
//! - [`format_artifact`]: one record to one fragment (fixed field order, data-dependent presence)
//! - [`assemble`]: ordering, preamble, element separators, closing brackets
//!
//! The only filesystem access is path canonicalization, reached through [`Canonicalize`].

#![forbid(unsafe_code)]

mod canonical;
mod document;
mod fields;
mod fragment;

#[cfg(test)]
mod proptest;

pub use canonical::{Canonicalize, FsCanonicalizer, PathResolutionError};
pub use document::{assemble, assemble_with, order_records};
pub use fragment::{Fragment, format_artifact, format_artifact_with};
