//! Error types for table merging

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MergeError`]
pub type Result<T> = std::result::Result<T, MergeError>;

/// Failures that abort a merge run
#[derive(Debug, Error)]
pub enum MergeError {
    /// The input directory could not be listed
    #[error("failed to list directory '{directory}': {source}")]
    Discovery {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No .docx files were found
    #[error("no .docx files found in '{directory}'")]
    EmptyInput { directory: PathBuf },

    /// The first document could not be opened or has no table
    #[error("Error opening file {file}: {source}")]
    DocumentOpen {
        file: String,
        #[source]
        source: LoadError,
    },

    /// A document failed while its rows were being collected
    #[error("Error processing file {file}: {source}")]
    RowProcessing {
        file: String,
        #[source]
        source: LoadError,
    },

    /// The merged document could not be written
    #[error("Error saving file {file}: {source}")]
    DocumentSave {
        file: String,
        #[source]
        source: SaveError,
    },
}

/// Failures while reading a single .docx file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Not a zip container, or missing `word/document.xml`
    #[error("{0}")]
    InvalidFormat(String),

    #[error("failed to parse document: {0}")]
    Parse(#[from] docx_rs::ReaderError),

    #[error("document contains no table")]
    NoTable,
}

/// Failures while writing the merged .docx file
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The output name is not a single file name inside the input directory
    #[error("invalid output file name '{0}': expected a plain file name")]
    InvalidName(String),

    /// docx-rs failed to assemble the package
    #[error("failed to pack document: {0}")]
    Pack(String),
}
