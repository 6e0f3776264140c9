//! Document to text serialization
//!
//! The output is a deterministic projection of the model: separator rows are
//! never written back, and the text always ends with exactly one newline
//! unless the document is empty.

use super::models::{Document, Exercise, Row};

/// Render a single table row as `| a | b |`
pub fn format_row(row: &Row) -> String {
    format!("| {} |", row.join(" | "))
}

fn push_exercise(lines: &mut Vec<String>, exercise: &Exercise) {
    if let Some(note) = exercise.note.as_deref().filter(|note| !note.is_empty()) {
        lines.extend(note.split('\n').map(str::to_string));
    }
    lines.push(format!("### {}", exercise.name));
    lines.extend(exercise.table.iter().map(format_row));
    lines.push(String::new());
}

/// Serialize a `Document` into `.tmd` text
pub fn serialize(document: &Document) -> String {
    let mut lines = Vec::new();

    if let Some(title) = document.title.as_deref().filter(|title| !title.is_empty()) {
        lines.push(format!("[[{title}]]"));
        lines.push(String::new());
    }

    for exercise in &document.exercises {
        push_exercise(&mut lines, exercise);
    }

    let mut output = lines.join("\n");
    let trimmed_len = output.trim_end_matches('\n').len();
    if trimmed_len < output.len() {
        output.truncate(trimmed_len);
        output.push('\n');
    }

    tracing::debug!(
        exercises = document.exercises.len(),
        bytes = output.len(),
        "serialized document"
    );
    output
}
