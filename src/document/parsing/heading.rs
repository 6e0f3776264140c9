//! Title and exercise heading detection
//!
//! A document may open with a `[[title]]` line, and every exercise starts
//! with a `### name` line. Both are recognized on the raw line, without
//! trimming leading whitespace first.

/// Marker that opens an exercise heading line
pub(crate) const HEADING_MARKER: &str = "### ";

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub(crate) fn is_heading_line(line: &str) -> bool {
    line.starts_with(HEADING_MARKER)
}

/// Extract the title from a `[[...]]` line.
///
/// Returns `None` when the line is not a title block. A title block with
/// nothing inside it yields `Some("")`; the caller decides what to keep.
pub(crate) fn parse_title_line(line: &str) -> Option<&str> {
    line.strip_prefix("[[")
        .and_then(|rest| rest.strip_suffix("]]"))
        .map(str::trim)
}

/// Extract the exercise name from a `### name` line
pub(crate) fn parse_exercise_heading(line: &str) -> Option<&str> {
    line.strip_prefix(HEADING_MARKER).map(str::trim)
}
