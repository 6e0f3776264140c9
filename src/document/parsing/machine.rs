//! Body state machine
//!
//! After the optional title, the body is read as a repeating cycle of
//! note, heading, table and trailer. Each phase is one state with its own
//! step function so the transitions can be exercised on their own.

use super::super::models::Exercise;
use super::heading::{is_blank, is_heading_line, parse_exercise_heading};
use super::table::{is_table_line, parse_table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseState {
    /// Gathering commentary lines until a heading shows up
    CollectingNote,
    /// Positioned on a heading line, carrying the note gathered before it
    ExpectHeading { note: Option<String> },
    /// Past the heading, gathering pipe lines
    CollectingTable { name: String, note: Option<String> },
    /// Dropping whatever follows a table until the next heading
    SkippingTrailer,
    Done,
}

pub(crate) struct BodyParser<'a> {
    lines: &'a [&'a str],
    pos: usize,
    exercises: Vec<Exercise>,
}

impl<'a> BodyParser<'a> {
    pub(crate) fn new(lines: &'a [&'a str], pos: usize) -> Self {
        Self {
            lines,
            pos,
            exercises: Vec::new(),
        }
    }

    /// Drive the machine to completion and hand back the exercises in order
    pub(crate) fn run(mut self) -> Vec<Exercise> {
        let mut state = if self.at_end() {
            ParseState::Done
        } else {
            ParseState::CollectingNote
        };

        while state != ParseState::Done {
            state = self.step(state);
        }

        self.exercises
    }

    pub(crate) fn step(&mut self, state: ParseState) -> ParseState {
        match state {
            ParseState::CollectingNote => self.collect_note(),
            ParseState::ExpectHeading { note } => self.expect_heading(note),
            ParseState::CollectingTable { name, note } => self.collect_table(name, note),
            ParseState::SkippingTrailer => self.skip_trailer(),
            ParseState::Done => ParseState::Done,
        }
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn skip_blank_lines(&mut self) {
        while self.current().is_some_and(is_blank) {
            self.pos += 1;
        }
    }

    fn collect_note(&mut self) -> ParseState {
        let mut note_lines = Vec::new();

        while let Some(line) = self.current() {
            if is_heading_line(line) {
                break;
            }
            if !is_blank(line) {
                note_lines.push(line);
            }
            self.pos += 1;
        }

        if self.at_end() {
            if !note_lines.is_empty() {
                // Known data loss: a note with no heading after it has nowhere to go
                tracing::debug!(lines = note_lines.len(), "dropping trailing note without heading");
            }
            return ParseState::Done;
        }

        let note = if note_lines.is_empty() {
            None
        } else {
            Some(note_lines.join("\n"))
        };
        ParseState::ExpectHeading { note }
    }

    fn expect_heading(&mut self, note: Option<String>) -> ParseState {
        let Some(name) = self.current().and_then(parse_exercise_heading) else {
            return if self.at_end() {
                ParseState::Done
            } else {
                ParseState::SkippingTrailer
            };
        };

        self.pos += 1;
        self.skip_blank_lines();

        ParseState::CollectingTable {
            name: name.to_string(),
            note,
        }
    }

    fn collect_table(&mut self, name: String, note: Option<String>) -> ParseState {
        let mut table_lines = Vec::new();

        while let Some(line) = self.current() {
            if is_blank(line) {
                self.pos += 1;
                continue;
            }
            if is_table_line(line) {
                table_lines.push(line);
                self.pos += 1;
                continue;
            }
            break;
        }

        let table = parse_table(&table_lines);
        tracing::debug!(exercise = %name, rows = table.len(), has_note = note.is_some(), "parsed exercise");

        self.exercises.push(Exercise { name, note, table });
        ParseState::SkippingTrailer
    }

    fn skip_trailer(&mut self) -> ParseState {
        let start = self.pos;
        while self.current().is_some_and(|line| !is_heading_line(line)) {
            self.pos += 1;
        }
        if self.pos > start {
            tracing::trace!(lines = self.pos - start, "skipped trailing lines");
        }

        if self.at_end() {
            ParseState::Done
        } else {
            ParseState::CollectingNote
        }
    }
}
