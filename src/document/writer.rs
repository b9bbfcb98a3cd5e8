//! Building and saving .docx files
//!
//! The merged table is rendered into a fresh docx-rs document, packed into
//! memory and only then written to disk.

use std::io::Cursor;
use std::path::Path;

use super::models::{Table, TableRow};
use crate::error::SaveError;

/// Usable text width of a default A4/Letter page in twips
const TEXT_WIDTH_TWIPS: usize = 9000;

/// Build a docx-rs document whose body is exactly `table`
pub(crate) fn build_table_document(table: &Table) -> docx_rs::Docx {
    let rows = table.rows.iter().map(build_row).collect();

    let column_width = TEXT_WIDTH_TWIPS / table.column_count.max(1);
    let mut docx_table =
        docx_rs::Table::new(rows).set_grid(vec![column_width; table.column_count]);

    if let Some(style) = &table.style {
        docx_table = docx_table.style(style);
    }

    docx_rs::Docx::new().add_table(docx_table)
}

fn build_row(row: &TableRow) -> docx_rs::TableRow {
    docx_rs::TableRow::new(row.cells.iter().map(|text| build_cell(text)).collect())
}

/// One cell per text; `\n` starts a new paragraph, `\t` becomes a tab
fn build_cell(text: &str) -> docx_rs::TableCell {
    let mut cell = docx_rs::TableCell::new();

    for line in text.split('\n') {
        let mut run = docx_rs::Run::new();
        for (i, segment) in line.split('\t').enumerate() {
            if i > 0 {
                run = run.add_tab();
            }
            if !segment.is_empty() {
                run = run.add_text(segment);
            }
        }
        cell = cell.add_paragraph(docx_rs::Paragraph::new().add_run(run));
    }

    cell
}

/// Render `table` as a .docx package in memory
pub fn pack_table_document(table: &Table) -> Result<Vec<u8>, SaveError> {
    let mut buffer = Cursor::new(Vec::new());
    build_table_document(table)
        .build()
        .pack(&mut buffer)
        .map_err(|e| SaveError::Pack(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Write `table` as a new .docx file at `path`, replacing any existing file
pub fn write_table_document(path: &Path, table: &Table) -> Result<(), SaveError> {
    let bytes = pack_table_document(table)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
