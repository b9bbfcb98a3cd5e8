//! Table extraction
//!
//! This module converts the first table of a docx-rs document body into
//! the typed [`Table`] model: cell texts per row, grid column count and
//! table style.

use super::super::models::*;
use super::formatting::{
    debug_ident_value, debug_number_value, debug_string_value, extract_paragraph_text,
};

/// Extract the first top-level table of the document body.
///
/// Later tables, and tables nested inside cells, are ignored.
pub(crate) fn extract_first_table(docx: &docx_rs::Docx) -> Option<Table> {
    docx.document.children.iter().find_map(|child| match child {
        docx_rs::DocumentChild::Table(table) => Some(extract_table(table)),
        _ => None,
    })
}

/// Convert a docx-rs table into cell texts
pub(crate) fn extract_table(table: &docx_rs::Table) -> Table {
    let mut rows: Vec<TableRow> = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells: Vec<String> = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;

            // A vertical merge continuation shows the text of the cell
            // above it in the same grid column
            let text = if continues_vertical_merge(cell) {
                rows.last()
                    .and_then(|above| above.cells.get(cells.len()))
                    .cloned()
                    .unwrap_or_default()
            } else {
                extract_cell_text(cell)
            };

            // A merged cell covers several grid columns and reads as one
            // copy per column
            let span = cell_grid_span(cell).max(1);
            for _ in 1..span {
                cells.push(text.clone());
            }
            cells.push(text);
        }

        rows.push(TableRow::new(cells));
    }

    let column_count = if table.grid.is_empty() {
        rows.iter().map(TableRow::len).max().unwrap_or(0)
    } else {
        table.grid.len()
    };

    Table {
        rows,
        column_count,
        style: table_style(table),
    }
}

/// Text of a cell: its paragraphs joined with newlines
fn extract_cell_text(cell: &docx_rs::TableCell) -> String {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            paragraphs.push(extract_paragraph_text(para));
        }
    }

    paragraphs.join("\n")
}

/// Number of grid columns a cell spans (`w:gridSpan`), 1 when unset
fn cell_grid_span(cell: &docx_rs::TableCell) -> usize {
    let property_debug = format!("{:?}", cell.property);
    debug_number_value(&property_debug, "GridSpan").unwrap_or(1)
}

/// Whether the cell carries `w:vMerge` without `restart`
fn continues_vertical_merge(cell: &docx_rs::TableCell) -> bool {
    let property_debug = format!("{:?}", cell.property);
    debug_ident_value(&property_debug, "VMerge { val: ").as_deref() == Some("Continue")
}

/// Style id of the table (`w:tblStyle`), if any
fn table_style(table: &docx_rs::Table) -> Option<String> {
    let property_debug = format!("{:?}", table.property);
    debug_string_value(&property_debug, "TableStyle").filter(|style| !style.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_cell(text: &str) -> docx_rs::TableCell {
        docx_rs::TableCell::new()
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(text)))
    }

    fn text_row(cells: &[&str]) -> docx_rs::TableRow {
        docx_rs::TableRow::new(cells.iter().map(|text| text_cell(text)).collect())
    }

    #[test]
    fn test_extract_plain_table() {
        let table = docx_rs::Table::new(vec![
            text_row(&["ID", "Name"]),
            text_row(&["1", "Alice"]),
            text_row(&["2", "Bob"]),
        ])
        .set_grid(vec![2000, 2000]);

        let extracted = extract_table(&table);

        assert_eq!(extracted.column_count, 2);
        assert_eq!(extracted.row_count(), 3);
        assert_eq!(extracted.rows[1].cells, vec!["1", "Alice"]);
        assert_eq!(extracted.style, None);
    }

    #[test]
    fn test_column_count_falls_back_to_widest_row() {
        let table = docx_rs::Table::new(vec![text_row(&["a"]), text_row(&["b", "c", "d"])]);

        assert_eq!(extract_table(&table).column_count, 3);
    }

    #[test]
    fn test_grid_span_repeats_cell_text() {
        let merged = text_cell("wide").grid_span(2);
        let table = docx_rs::Table::new(vec![
            docx_rs::TableRow::new(vec![merged, text_cell("x")]),
            text_row(&["1", "2", "3"]),
        ])
        .set_grid(vec![1000, 1000, 1000]);

        let extracted = extract_table(&table);

        assert_eq!(extracted.rows[0].cells, vec!["wide", "wide", "x"]);
        assert_eq!(extracted.rows[1].cells, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_vertical_merge_repeats_text_from_above() {
        let table = docx_rs::Table::new(vec![
            docx_rs::TableRow::new(vec![
                text_cell("A").vertical_merge(docx_rs::VMergeType::Restart),
                text_cell("1"),
            ]),
            docx_rs::TableRow::new(vec![
                docx_rs::TableCell::new()
                    .add_paragraph(docx_rs::Paragraph::new())
                    .vertical_merge(docx_rs::VMergeType::Continue),
                text_cell("2"),
            ]),
            docx_rs::TableRow::new(vec![
                docx_rs::TableCell::new()
                    .add_paragraph(docx_rs::Paragraph::new())
                    .vertical_merge(docx_rs::VMergeType::Continue),
                text_cell("3"),
            ]),
            text_row(&["", "4"]),
        ])
        .set_grid(vec![1000, 1000]);

        let extracted = extract_table(&table);

        assert_eq!(
            extracted.to_text_grid(),
            vec![
                vec!["A", "1"],
                vec!["A", "2"],
                vec!["A", "3"],
                vec!["", "4"],
            ]
        );
        assert_eq!(extracted.rows[1].key(), "A", "Merged key cells share the key above");
    }

    #[test]
    fn test_vertical_merge_follows_grid_column_after_span() {
        let table = docx_rs::Table::new(vec![
            docx_rs::TableRow::new(vec![
                text_cell("wide").grid_span(2),
                text_cell("top").vertical_merge(docx_rs::VMergeType::Restart),
            ]),
            docx_rs::TableRow::new(vec![
                text_cell("x"),
                text_cell("y"),
                docx_rs::TableCell::new()
                    .add_paragraph(docx_rs::Paragraph::new())
                    .vertical_merge(docx_rs::VMergeType::Continue),
            ]),
        ])
        .set_grid(vec![1000, 1000, 1000]);

        assert_eq!(
            extract_table(&table).rows[1].cells,
            vec!["x", "y", "top"]
        );
    }

    #[test]
    fn test_multi_paragraph_cell() {
        let cell = docx_rs::TableCell::new()
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("first")))
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("second")));
        let table = docx_rs::Table::new(vec![docx_rs::TableRow::new(vec![cell])]);

        assert_eq!(extract_table(&table).rows[0].cells, vec!["first\nsecond"]);
    }

    #[test]
    fn test_table_style_is_read() {
        let table = docx_rs::Table::new(vec![text_row(&["a"])]).style("TableGrid");

        assert_eq!(extract_table(&table).style.as_deref(), Some("TableGrid"));
    }

    #[test]
    fn test_first_table_only() {
        let docx = docx_rs::Docx::new()
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("intro")))
            .add_table(docx_rs::Table::new(vec![text_row(&["first"])]))
            .add_table(docx_rs::Table::new(vec![text_row(&["second"])]));

        let extracted = extract_first_table(&docx).expect("document has a table");
        assert_eq!(extracted.rows[0].cells, vec!["first"]);
    }

    #[test]
    fn test_no_table() {
        let docx = docx_rs::Docx::new()
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("text only")));

        assert!(extract_first_table(&docx).is_none());
    }
}
