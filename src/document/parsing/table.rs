//! Pipe table extraction
//!
//! This module turns the raw `| a | b |` lines collected under an exercise
//! heading into rows of trimmed cells, dropping separator rows such as
//! `| --- | --- |` along the way.

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::models::{Row, Table};

static DASHES_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-+$").unwrap());

/// A collected table line starts with a pipe once surrounding whitespace is ignored
pub(crate) fn is_table_line(line: &str) -> bool {
    line.trim().starts_with('|')
}

/// Split one raw table line into trimmed cells.
///
/// Only a single leading and a single trailing pipe are stripped, and only
/// when they sit at the very edges of the line. There is no escaping, so a
/// literal `|` inside a cell always starts a new column.
pub(crate) fn split_table_row(line: &str) -> Row {
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);

    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// A row whose cells are all empty or made of dashes only
pub(crate) fn is_separator_row(row: &[String]) -> bool {
    row.iter()
        .all(|cell| cell.is_empty() || DASHES_ONLY.is_match(cell))
}

/// Parse collected table lines, keeping content rows in their original order
pub(crate) fn parse_table(lines: &[&str]) -> Table {
    let table: Table = lines
        .iter()
        .map(|line| split_table_row(line))
        .filter(|row| !is_separator_row(row))
        .collect();

    tracing::trace!(rows = table.len(), "parsed table");
    table
}
