//! Use case orchestration for deplist.
//!
//! This crate provides the application layer: use cases that coordinate the settings, render,
//! and filesystem layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and process I/O.

#![forbid(unsafe_code)]

mod error;
mod render;
mod snapshot;
mod verify;
mod write;
mod writer;

pub use error::DocumentWriteError;
pub use render::{render_document, select_records};
pub use snapshot::{load_snapshot, parse_snapshot_json};
pub use verify::{DocumentSummary, verify_document};
pub use write::{WriteInput, WriteOutput, run_write};
pub use writer::{SerializedDocument, write_document};
