//! Document search and navigation operations
//!
//! This module provides read-only querying operations on parsed documents,
//! including full-text search and outline generation.

use regex::{Regex, RegexBuilder};

use super::models::*;

/// Literal, case-insensitive matcher; offsets it reports are into the searched text itself
fn build_matcher(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .map_err(|error| tracing::debug!(%error, "search query rejected"))
        .ok()
}

pub fn search_document(document: &Document, query: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();
    if query.trim().is_empty() {
        return results;
    }
    let Some(matcher) = build_matcher(query) else {
        return results;
    };

    let mut push = |exercise_index: usize, location: MatchLocation, text: &str| {
        if let Some(found) = matcher.find(text) {
            results.push(SearchResult {
                exercise_index,
                location,
                text: text.to_string(),
                start_pos: found.start(),
                end_pos: found.end(),
            });
        }
    };

    for (exercise_index, exercise) in document.exercises.iter().enumerate() {
        push(exercise_index, MatchLocation::Name, &exercise.name);

        if let Some(note) = &exercise.note {
            push(exercise_index, MatchLocation::Note, note);
        }

        for (row, cells) in exercise.table.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                push(exercise_index, MatchLocation::Cell { row, column }, cell);
            }
        }
    }

    results
}

pub fn generate_outline(document: &Document) -> Vec<OutlineItem> {
    document
        .exercises
        .iter()
        .enumerate()
        .map(|(exercise_index, exercise)| OutlineItem {
            name: exercise.name.clone(),
            exercise_index,
            set_count: exercise.sets().len(),
        })
        .collect()
}
