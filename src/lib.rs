//! docx-table-merge: merge the tables of many .docx files into one
//!
//! This library reads the first table of every Word document in a
//! directory, drops rows whose first-column text was already seen, and
//! writes the remaining rows as a single table in a new document.

pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod merge;

// Re-export commonly used types
pub use config::{ConfigOverrides, MergeConfig};
pub use document::{Table, TableRow};
pub use error::{LoadError, MergeError, SaveError};
pub use merge::{merge_tables, MergeReport, TableMerger};
