//! Parsing of docx-rs structures into the table model

pub(crate) mod formatting;
pub(crate) mod table;
