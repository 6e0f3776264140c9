//! Normalization of hand-built documents
//!
//! Documents coming out of `parse` are already in normal form. Documents
//! assembled by an editor may not be: cells can carry padding, notes can be
//! blank, and empty rows would vanish on the next parse. `normalize` applies
//! the same rules the parser does so that a save/reload cycle is stable.

use super::models::*;
use super::parsing::heading::{is_heading_line, parse_title_line};
use super::parsing::table::is_separator_row;

/// Names, cells and the title live on a single line
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ").trim().to_string()
}

/// Drop blank lines from a note; a note with nothing left is absent.
///
/// Lines that would read back as an exercise heading are indented by one space.
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    let lines: Vec<String> = note?
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if is_heading_line(line) {
                format!(" {line}")
            } else {
                line.to_string()
            }
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn normalize_table(table: &Table) -> Table {
    table
        .iter()
        .map(|row| row.iter().map(|cell| single_line(cell)).collect::<Row>())
        .filter(|row| !is_separator_row(row))
        .collect()
}

/// Split `[[...]]` lines off the front of an untitled document's first note.
///
/// Written first in the file, such a line is the title block. An empty one
/// is dropped since the serializer never writes an empty title.
fn split_leading_title(note: &str) -> (Option<String>, Option<String>) {
    let mut lines = note.split('\n').peekable();
    let mut title = None;

    while title.is_none() {
        let Some(interior) = lines.peek().copied().and_then(parse_title_line) else {
            break;
        };
        if !interior.is_empty() {
            title = Some(interior.to_string());
        }
        lines.next();
    }

    let rest: Vec<&str> = lines.collect();
    (title, (!rest.is_empty()).then(|| rest.join("\n")))
}

/// Bring a document into the form `parse` would produce for its serialization
pub fn normalize(document: &Document) -> Document {
    let mut title = document
        .title
        .as_deref()
        .map(single_line)
        .filter(|title| !title.is_empty());

    let mut exercises: Vec<Exercise> = document
        .exercises
        .iter()
        .map(|exercise| Exercise {
            name: single_line(&exercise.name),
            note: normalize_note(exercise.note.as_deref()),
            table: normalize_table(&exercise.table),
        })
        .collect();

    if title.is_none() {
        if let Some(first) = exercises.first_mut() {
            if let Some(note) = first.note.take() {
                let (lifted, rest) = split_leading_title(&note);
                if lifted.is_some() {
                    tracing::debug!("moved leading title line out of the first note");
                }
                title = lifted;
                first.note = rest;
            }
        }
    }

    Document { title, exercises }
}
