//! Order-preserving, first-column deduplicated table merging
//!
//! [`TableMerger`] reads the first table of every .docx file in a
//! directory and concatenates their rows into one table, keeping only the
//! first row seen for each trimmed first-column value. The result is
//! written as a new .docx file in the same directory.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::document::{list_docx_files, read_first_table, write_table_document, Table};
use crate::error::{MergeError, Result, SaveError};

/// Summary of a successful merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub output_path: PathBuf,
    pub documents: usize,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub duplicates_skipped: usize,
    /// Rows padded or truncated to the output column count
    pub rows_reshaped: usize,
}

/// Merges the first tables of every .docx file in one directory
#[derive(Debug, Clone)]
pub struct TableMerger {
    directory: PathBuf,
    output_file: String,
}

impl TableMerger {
    pub fn new(directory: impl Into<PathBuf>, output_file: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            output_file: output_file.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.output_file)
    }

    /// Run the merge, returning a report or the first failure.
    ///
    /// Nothing is written unless every source was read successfully.
    pub fn merge(&self) -> Result<MergeReport> {
        validate_output_name(&self.output_file).map_err(|source| MergeError::DocumentSave {
            file: self.output_file.clone(),
            source,
        })?;

        let files = list_docx_files(&self.directory, Some(self.output_file.as_str())).map_err(|source| {
            MergeError::Discovery {
                directory: self.directory.clone(),
                source,
            }
        })?;

        let Some(first) = files.first() else {
            return Err(MergeError::EmptyInput {
                directory: self.directory.clone(),
            });
        };
        debug!("Found {} documents in {}", files.len(), self.directory.display());

        // The first table fixes the shape and style of the output
        let template = read_first_table(first).map_err(|source| MergeError::DocumentOpen {
            file: display_name(first),
            source,
        })?;
        let mut merged = Table::new(template.column_count).with_style(template.style);

        let mut seen_keys: HashSet<String> = HashSet::new();
        let mut rows_read = 0;
        let mut rows_reshaped = 0;

        for path in &files {
            let table = read_first_table(path).map_err(|source| MergeError::RowProcessing {
                file: display_name(path),
                source,
            })?;
            debug!("Read {} rows from {}", table.row_count(), display_name(path));

            for mut row in table.rows {
                rows_read += 1;

                if seen_keys.contains(row.key()) {
                    continue;
                }
                seen_keys.insert(row.key().to_string());

                let original_len = row.len();
                if row.conform_to(merged.column_count) {
                    rows_reshaped += 1;
                    warn!(
                        "Row '{}' in {} has {} cells, expected {}",
                        row.key(),
                        display_name(path),
                        original_len,
                        merged.column_count
                    );
                }
                merged.push_row(row);
            }
        }

        let output_path = self.output_path();
        write_table_document(&output_path, &merged).map_err(|source| MergeError::DocumentSave {
            file: self.output_file.clone(),
            source,
        })?;

        let report = MergeReport {
            output_path,
            documents: files.len(),
            rows_read,
            rows_kept: merged.row_count(),
            duplicates_skipped: rows_read - merged.row_count(),
            rows_reshaped,
        };
        info!(
            "Merged {} rows from {} documents into {} ({} duplicates skipped)",
            report.rows_kept,
            report.documents,
            report.output_path.display(),
            report.duplicates_skipped
        );

        Ok(report)
    }
}

/// Merge the tables in `directory` into `output_file`, logging any failure.
///
/// Returns `true` only when the merged document was written.
pub fn merge_tables(directory: &Path, output_file: &str) -> bool {
    match TableMerger::new(directory, output_file).merge() {
        Ok(_) => true,
        Err(e) => {
            error!("{e}");
            false
        }
    }
}

/// The output must be exactly one normal path component
fn validate_output_name(name: &str) -> std::result::Result<(), SaveError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(SaveError::InvalidName(name.to_string())),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
