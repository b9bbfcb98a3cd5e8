//! File I/O operations and validation
//!
//! This module handles .docx discovery in a directory, container
//! validation and reading the first table of a file.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use super::models::Table;
use super::parsing::table::extract_first_table;
use crate::error::LoadError;

const DOCX_SUFFIX: &str = ".docx";

/// Prefix Word uses for the lock file it keeps next to an open document
const LOCK_FILE_PREFIX: &str = "~$";

/// List the .docx files directly inside `directory`, sorted by file name.
///
/// Word lock files and the file named `exclude` (usually the merge output)
/// are left out.
pub fn list_docx_files(directory: &Path, exclude: Option<&str>) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() && !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };

        // Match on the raw name so non-UTF-8 file names are still found
        let bytes = name.as_encoded_bytes();
        if !bytes.ends_with(DOCX_SUFFIX.as_bytes()) || bytes.starts_with(LOCK_FILE_PREFIX.as_bytes())
        {
            continue;
        }

        if exclude.is_some_and(|excluded| name == OsStr::new(excluded)) {
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<(), LoadError> {
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| {
        LoadError::InvalidFormat(format!(
            "Invalid .docx file: not a zip container ({e})\n\
            This file may be corrupted or is not a valid Word document."
        ))
    })?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(LoadError::InvalidFormat(
                "This appears to be an Excel file (.xlsx).\n\
                Only Word documents (.docx) can be merged."
                    .to_string(),
            ));
        }

        return Err(LoadError::InvalidFormat(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
                .to_string(),
        ));
    }

    Ok(())
}

/// Open a .docx file and extract the first table of its body
pub fn read_first_table(file_path: &Path) -> Result<Table, LoadError> {
    validate_docx_file(file_path)?;

    let file_data = fs::read(file_path)?;
    let docx = docx_rs::read_docx(&file_data)?;

    extract_first_table(&docx).ok_or(LoadError::NoTable)
}
