//! Core data structures for document representation
//!
//! This module defines the public types used to represent a parsed workout
//! log: the document itself, its exercises and their tables, plus the result
//! types produced by the query functions.

use serde::{Deserialize, Serialize};

// Type aliases for convenience
pub type Row = Vec<String>;
pub type Table = Vec<Row>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Document {
    pub fn new(title: Option<String>, exercises: Vec<Exercise>) -> Self {
        Self { title, exercises }
    }

    /// True when there is neither a title nor any exercise
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub table: Table,
}

impl Exercise {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            note: None,
            table,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The first row of the table, which by convention holds the column labels
    pub fn header(&self) -> Option<&Row> {
        self.table.first()
    }

    /// Data rows (sets), i.e. everything after the header
    pub fn sets(&self) -> &[Row] {
        self.table.get(1..).unwrap_or(&[])
    }

    /// Width of the header row; rows are not required to match it
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, Vec::len)
    }
}

/// Where inside an exercise a search hit was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLocation {
    Name,
    Note,
    Cell { row: usize, column: usize },
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub exercise_index: usize,
    pub location: MatchLocation,
    pub text: String,
    pub start_pos: usize,
    pub end_pos: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineItem {
    pub name: String,
    pub exercise_index: usize,
    pub set_count: usize,
}
