//! File I/O operations and validation
//!
//! This module handles `.tmd` file validation, loading and saving, plus the
//! naming and starting content of newly created files.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use super::models::{Document, Row};
use super::parsing::parse;
use super::serialize::{format_row, serialize};
use crate::config::Config;

pub const TMD_EXTENSION: &str = "tmd";

/// Validates that the path names a .tmd file
pub fn validate_tmd_path(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != TMD_EXTENSION {
        bail!(
            "Invalid file format. Expected .tmd file, got .{}\n\
            Note: plain .md notes can be copied to a .tmd file first",
            extension
        );
    }

    Ok(())
}

/// Read and parse a .tmd file
pub async fn load_document(file_path: &Path) -> Result<Document> {
    validate_tmd_path(file_path)?;

    let content = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("failed to read {}", file_path.display()))?;

    tracing::info!(path = %file_path.display(), bytes = content.len(), "loaded document");
    Ok(parse(&content))
}

/// Serialize a document and write it to a .tmd file
pub async fn save_document(file_path: &Path, document: &Document) -> Result<()> {
    validate_tmd_path(file_path)?;

    let content = serialize(document);
    tokio::fs::write(file_path, &content)
        .await
        .with_context(|| format!("failed to write {}", file_path.display()))?;

    tracing::info!(path = %file_path.display(), bytes = content.len(), "saved document");
    Ok(())
}

/// Write `content` to a .tmd file that must not exist yet
pub async fn create_document_file(file_path: &Path, content: &str) -> Result<()> {
    validate_tmd_path(file_path)?;

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file_path)
        .await
        .with_context(|| format!("failed to create {}", file_path.display()))?;
    file.write_all(content.as_bytes())
        .await
        .with_context(|| format!("failed to write {}", file_path.display()))?;
    file.flush().await?;

    tracing::info!(path = %file_path.display(), bytes = content.len(), "created document");
    Ok(())
}

/// Format a date as a file stem using a chrono format string
pub fn date_stem(date: NaiveDate, format: &str) -> Result<String> {
    let mut stem = String::new();
    if write!(stem, "{}", date.format(format)).is_err() {
        bail!("Invalid date format: {format}");
    }
    Ok(stem)
}

/// First of `stem.tmd`, `stem 1.tmd`, `stem 2.tmd`, ... that does not exist in `dir`
pub fn unique_tmd_path(dir: &Path, stem: &str) -> PathBuf {
    let mut candidate = dir.join(format!("{stem}.{TMD_EXTENSION}"));
    let mut counter = 1;

    while candidate.exists() {
        candidate = dir.join(format!("{stem} {counter}.{TMD_EXTENSION}"));
        counter += 1;
    }

    candidate
}

/// Starting content of a new file: a title and one exercise with an empty set
pub fn new_document_text(config: &Config) -> String {
    let header = &config.exercise.header;
    let separator: Row = header.iter().map(|_| "---".to_string()).collect();
    let blank: Row = vec![String::new(); header.len().max(1)];

    let mut text = String::new();
    let title = config.new_file.title.trim();
    if !title.is_empty() {
        text.push_str(&format!("[[{title}]]\n\n"));
    }
    text.push_str(&format!("### {}\n", config.new_file.exercise_name.trim()));
    for row in [header, &separator, &blank] {
        if !row.is_empty() {
            text.push_str(&format_row(row));
            text.push('\n');
        }
    }
    text
}
