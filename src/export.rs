use anyhow::Result;
use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;

use crate::{ExportFormat, document::*};

pub fn export_document(document: &Document, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Tmd => Ok(serialize(document)),
        ExportFormat::Json => export_to_json(document),
        ExportFormat::Csv => export_to_csv(document),
        ExportFormat::Text => export_to_text(document),
    }
}

pub fn export_to_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One line per data cell: exercise, set number, column label, value
pub fn export_to_csv(document: &Document) -> Result<String> {
    let mut output = String::from("exercise,set,column,value\n");

    for exercise in &document.exercises {
        let header = exercise.header().map(Vec::as_slice).unwrap_or(&[]);
        for (set_index, row) in exercise.sets().iter().enumerate() {
            for (column, value) in row.iter().enumerate() {
                let label = header.get(column).map(String::as_str).unwrap_or("");
                writeln!(
                    output,
                    "{},{},{},{}",
                    csv_field(&exercise.name),
                    set_index + 1,
                    csv_field(label),
                    csv_field(value)
                )?;
            }
        }
    }

    Ok(output)
}

fn display_width(text: &str) -> usize {
    text.graphemes(true).count()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            let width = display_width(cell);
            match widths.get_mut(i) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

fn write_text_row(output: &mut String, row: &Row, widths: &[usize]) -> Result<()> {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    writeln!(output, "  {}", cells.join(" | ").trim_end())?;
    Ok(())
}

fn write_text_table(output: &mut String, table: &Table) -> Result<()> {
    let widths = column_widths(table);

    for (index, row) in table.iter().enumerate() {
        write_text_row(output, row, &widths)?;
        if index == 0 && table.len() > 1 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat((*w).max(1))).collect();
            writeln!(output, "  {}", rule.join("-+-"))?;
        }
    }

    Ok(())
}

/// Plain text with underlined headings and column-aligned tables
pub fn export_to_text(document: &Document) -> Result<String> {
    let mut output = String::new();

    if let Some(title) = document.title.as_deref().filter(|title| !title.is_empty()) {
        writeln!(output, "{title}")?;
        writeln!(output, "{}", "=".repeat(display_width(title)))?;
        output.push('\n');
    }

    for exercise in &document.exercises {
        writeln!(output, "{}", exercise.name)?;
        writeln!(output, "{}", "-".repeat(display_width(&exercise.name)))?;
        if let Some(note) = &exercise.note {
            for line in note.lines() {
                writeln!(output, "  {}", line.trim())?;
            }
        }
        write_text_table(&mut output, &exercise.table)?;
        output.push('\n');
    }

    Ok(output)
}
