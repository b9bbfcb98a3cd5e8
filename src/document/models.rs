//! Core data structures for table representation
//!
//! This module defines the typed table model shared by the reader, the
//! merger and the writer. Cells are plain text; formatting is not carried.

// Type aliases for convenience
pub type TableRows = Vec<TableRow>;

/// One row of a table: cell texts in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Text of the first cell, or `""` for a row without cells
    pub fn first_cell(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }

    /// Deduplication key: the trimmed text of the first cell
    pub fn key(&self) -> &str {
        self.first_cell().trim()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pad with empty cells or truncate so the row has exactly `column_count` cells.
    ///
    /// Returns `true` when the row had to be changed.
    pub fn conform_to(&mut self, column_count: usize) -> bool {
        if self.cells.len() == column_count {
            return false;
        }
        self.cells.resize(column_count, String::new());
        true
    }
}

impl<S: Into<String>> FromIterator<S> for TableRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A table extracted from, or destined for, a .docx body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: TableRows,
    pub column_count: usize,
    /// Table style id (`w:tblStyle`), applied to the whole table
    pub style: Option<String>,
}

impl Table {
    pub fn new(column_count: usize) -> Self {
        Self {
            rows: Vec::new(),
            column_count,
            style: None,
        }
    }

    pub fn with_style(mut self, style: Option<String>) -> Self {
        self.style = style;
        self
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell texts as nested vectors, convenient for comparisons
    pub fn to_text_grid(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.cells.clone()).collect()
    }
}
