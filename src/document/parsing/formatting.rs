//! Text extraction utilities
//!
//! This module handles extraction of plain text from docx-rs paragraph
//! and run elements, and recovers property values docx-rs keeps private.

/// Extract plain text from a paragraph: its runs and hyperlinked runs
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for child in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            // Tracked insertions and deletions are not direct runs
            _ => {}
        }
    }

    text
}

/// Extract text from a run
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(break_elem) => {
                // Page and column breaks carry no text
                let break_debug = format!("{break_elem:?}");
                let break_type = debug_ident_value(&break_debug, "break_type: ");
                if !matches!(break_type.as_deref(), Some("Page" | "Column")) {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }

    text
}

/// Pull a quoted `val` out of the debug output of a docx-rs property.
///
/// docx-rs keeps most property fields private; the derived `Debug` output
/// (`Marker { val: "..." }`) is the only stable way to read them back.
pub(crate) fn debug_string_value(debug: &str, marker: &str) -> Option<String> {
    let pattern = format!("{marker} {{ val: \"");
    let start = debug.find(&pattern)? + pattern.len();
    let end = debug[start..].find('"')?;
    Some(debug[start..start + end].to_string())
}

/// Read an unquoted identifier (an enum variant) following `prefix`
pub(crate) fn debug_ident_value(debug: &str, prefix: &str) -> Option<String> {
    let start = debug.find(prefix)? + prefix.len();
    let ident: String = debug[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    (!ident.is_empty()).then_some(ident)
}

/// Same as [`debug_string_value`] for unquoted numeric values
pub(crate) fn debug_number_value(debug: &str, marker: &str) -> Option<usize> {
    let pattern = format!("{marker} {{ val: ");
    let start = debug.find(&pattern)? + pattern.len();
    let digits: String = debug[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
