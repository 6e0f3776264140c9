//! tmd: parser and serializer for .tmd workout logs
//!
//! A `.tmd` file is an optional `[[title]]` followed by exercises, each a
//! `### name` heading over a pipe table of sets. This library converts such
//! text into a [`Document`] and back, and offers the editing, search and
//! export helpers the `tmd` binary is built on.

pub mod config;
pub mod document;
pub mod export;

use serde::{Deserialize, Serialize};

/// Export format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Normalized .tmd text
    Tmd,
    Json,
    Csv,
    /// Column-aligned plain text
    Text,
}

// Re-export commonly used types
pub use config::Config;
pub use document::{Document, Exercise, Row, parse, serialize};
