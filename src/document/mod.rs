//! Document reading and writing module
//!
//! This module provides functionality for finding Microsoft Word (.docx)
//! documents, extracting their first table into a typed representation,
//! and writing a table back out as a new document.

pub mod io;
pub mod models;
pub(crate) mod parsing;
pub mod writer;

pub use io::{list_docx_files, read_first_table};
pub use models::*;
pub use writer::{pack_table_document, write_table_document};
