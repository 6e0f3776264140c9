//! Copy-on-write editing operations
//!
//! Every edit takes the current document by reference and returns a new one,
//! leaving the input untouched. These are the operations an editing surface
//! performs between loading a file and handing the result to `serialize`.

use thiserror::Error;

use super::models::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("exercise {index} does not exist (document has {len})")]
    ExerciseOutOfRange { index: usize, len: usize },
    #[error("row {row} does not exist in exercise {exercise}")]
    RowOutOfRange { exercise: usize, row: usize },
    #[error("cell {row}:{column} does not exist in exercise {exercise}")]
    CellOutOfRange {
        exercise: usize,
        row: usize,
        column: usize,
    },
    #[error("exercise name cannot be empty")]
    EmptyName,
    #[error("the header row cannot be removed")]
    HeaderRow,
}

/// Shape of the table a newly inserted exercise starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub header: Vec<String>,
    pub blank_rows: usize,
}

impl Default for ExerciseTemplate {
    fn default() -> Self {
        Self {
            header: vec!["Weight".to_string(), "Reps".to_string()],
            blank_rows: 3,
        }
    }
}

impl ExerciseTemplate {
    pub fn build_table(&self) -> Table {
        let width = self.header.len().max(1);
        let mut table = vec![self.header.clone()];
        table.extend((0..self.blank_rows).map(|_| vec![String::new(); width]));
        table
    }
}

fn check_exercise(document: &Document, index: usize) -> Result<(), EditError> {
    if index < document.exercises.len() {
        Ok(())
    } else {
        Err(EditError::ExerciseOutOfRange {
            index,
            len: document.exercises.len(),
        })
    }
}

fn clean_name(name: &str) -> Result<String, EditError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditError::EmptyName);
    }
    Ok(name.to_string())
}

/// Replace one exercise through `update`, cloning everything else
fn with_exercise<F>(document: &Document, index: usize, update: F) -> Result<Document, EditError>
where
    F: FnOnce(&Exercise) -> Result<Exercise, EditError>,
{
    check_exercise(document, index)?;

    let mut exercises = document.exercises.clone();
    exercises[index] = update(&document.exercises[index])?;

    Ok(Document {
        title: document.title.clone(),
        exercises,
    })
}

/// Append an empty set sized to the header, or two cells for an empty table
pub fn add_row(document: &Document, exercise: usize) -> Result<Document, EditError> {
    let updated = with_exercise(document, exercise, |current| {
        let width = match current.column_count() {
            0 => 2,
            n => n,
        };
        let mut table = current.table.clone();
        table.push(vec![String::new(); width]);
        Ok(Exercise {
            table,
            ..current.clone()
        })
    })?;

    tracing::debug!(exercise, "added row");
    Ok(updated)
}

pub fn remove_row(document: &Document, exercise: usize, row: usize) -> Result<Document, EditError> {
    let updated = with_exercise(document, exercise, |current| {
        if row >= current.table.len() {
            return Err(EditError::RowOutOfRange { exercise, row });
        }
        if row == 0 {
            return Err(EditError::HeaderRow);
        }
        let table = current
            .table
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != row)
            .map(|(_, r)| r.clone())
            .collect();
        Ok(Exercise {
            table,
            ..current.clone()
        })
    })?;

    tracing::debug!(exercise, row, "removed row");
    Ok(updated)
}

pub fn set_cell(
    document: &Document,
    exercise: usize,
    row: usize,
    column: usize,
    value: &str,
) -> Result<Document, EditError> {
    let updated = with_exercise(document, exercise, |current| {
        let mut table = current.table.clone();
        let cell = table
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(EditError::CellOutOfRange {
                exercise,
                row,
                column,
            })?;
        *cell = value.to_string();
        Ok(Exercise {
            table,
            ..current.clone()
        })
    })?;

    tracing::debug!(exercise, row, column, "set cell");
    Ok(updated)
}

/// Insert a new exercise after `after`, or at the front when `after` is `None`
pub fn insert_exercise(
    document: &Document,
    after: Option<usize>,
    name: &str,
    template: &ExerciseTemplate,
) -> Result<Document, EditError> {
    let name = clean_name(name)?;
    let position = match after {
        Some(index) => {
            check_exercise(document, index)?;
            index + 1
        }
        None => 0,
    };

    tracing::debug!(exercise = %name, position, "inserted exercise");
    let mut exercises = document.exercises.clone();
    exercises.insert(position, Exercise::new(name, template.build_table()));

    Ok(Document {
        title: document.title.clone(),
        exercises,
    })
}

pub fn rename_exercise(
    document: &Document,
    exercise: usize,
    name: &str,
) -> Result<Document, EditError> {
    let name = clean_name(name)?;
    let updated = with_exercise(document, exercise, |current| {
        Ok(Exercise {
            name,
            ..current.clone()
        })
    })?;

    tracing::debug!(exercise, "renamed exercise");
    Ok(updated)
}

pub fn remove_exercise(document: &Document, exercise: usize) -> Result<Document, EditError> {
    check_exercise(document, exercise)?;

    let exercises = document
        .exercises
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != exercise)
        .map(|(_, e)| e.clone())
        .collect();

    tracing::debug!(exercise, "removed exercise");
    Ok(Document {
        title: document.title.clone(),
        exercises,
    })
}

/// Set the title; an empty or blank title removes it
pub fn set_title(document: &Document, title: &str) -> Document {
    let title = title.trim();
    tracing::debug!(cleared = title.is_empty(), "set title");
    Document {
        title: (!title.is_empty()).then(|| title.to_string()),
        exercises: document.exercises.clone(),
    }
}
