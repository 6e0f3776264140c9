//! Document parsing and data structures module
//!
//! This module converts `.tmd` text into a structured `Document` and back.
//! Parsing, serialization, editing, normalization and querying are pure
//! functions; only `io` touches the filesystem.

pub mod cleanup;
pub mod edit;
pub mod io;
pub mod models;
pub(crate) mod parsing;
pub mod query;
pub mod serialize;

// Re-export all models and query functions
pub use edit::{EditError, ExerciseTemplate};
pub use io::load_document;
pub use models::*;
pub use parsing::parse;
pub use query::*;
pub use serialize::serialize;
