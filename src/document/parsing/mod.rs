//! Text to document parsing
//!
//! `parse` never fails. Lines that do not fit the grammar are treated as
//! noise and dropped, so any input yields some `Document`.

pub(crate) mod heading;
pub(crate) mod machine;
pub(crate) mod table;

use super::models::Document;
use heading::{is_blank, parse_title_line};
use machine::BodyParser;

/// Split on `\n`, removing the `\r` of any `\r\n` pair
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        if let Some(stripped) = line.strip_suffix('\r') {
            *line = stripped;
        }
    }
    lines
}

/// Parse the text of a `.tmd` file into a `Document`
pub fn parse(text: &str) -> Document {
    let lines = split_lines(text);
    let mut pos = 0;

    let mut title = None;
    if let Some(interior) = lines.first().and_then(|line| parse_title_line(line)) {
        title = Some(interior.to_string());
        pos += 1;
    }

    while lines.get(pos).is_some_and(|line| is_blank(line)) {
        pos += 1;
    }

    let exercises = BodyParser::new(&lines, pos).run();
    tracing::debug!(
        title = title.as_deref().unwrap_or(""),
        exercises = exercises.len(),
        "parsed document"
    );

    Document { title, exercises }
}
