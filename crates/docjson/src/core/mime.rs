//! File-format classification.
//!
//! Maps a declared MIME type and a file name to a [`FormatCategory`]. Rules are
//! evaluated in order and the first match wins, so a file named `report.pdf`
//! declared as `text/plain` is still a PDF. Matching is case-sensitive.

use crate::types::FormatCategory;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const JSON_MIME_TYPE: &str = "application/json";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const EXCEL_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

type Rule = fn(&str, &str) -> bool;

fn is_pdf(mime: &str, name: &str) -> bool {
    mime == PDF_MIME_TYPE || name.ends_with(".pdf")
}

fn is_word(mime: &str, name: &str) -> bool {
    mime.contains("word") || name.ends_with(".docx")
}

fn is_spreadsheet(mime: &str, name: &str) -> bool {
    mime.contains("spreadsheet") || name.ends_with(".xlsx") || name.ends_with(".xls")
}

fn is_csv(mime: &str, name: &str) -> bool {
    mime == CSV_MIME_TYPE || name.ends_with(".csv")
}

fn is_image(mime: &str, _name: &str) -> bool {
    mime.starts_with("image/")
}

fn is_json(mime: &str, name: &str) -> bool {
    mime == JSON_MIME_TYPE || name.ends_with(".json")
}

fn is_text(mime: &str, _name: &str) -> bool {
    mime.starts_with("text/")
}

/// Classification rules in priority order.
static RULES: [(Rule, FormatCategory); 7] = [
    (is_pdf, FormatCategory::Pdf),
    (is_word, FormatCategory::Word),
    (is_spreadsheet, FormatCategory::Spreadsheet),
    (is_csv, FormatCategory::Csv),
    (is_image, FormatCategory::Image),
    (is_json, FormatCategory::Json),
    (is_text, FormatCategory::Text),
];

/// Classify a file by MIME type and file name.
///
/// Total and deterministic. Returns [`FormatCategory::Unsupported`] when no
/// rule matches.
///
/// # Example
///
/// ```rust
/// use docjson::{classify, FormatCategory};
///
/// assert_eq!(classify("application/octet-stream", "report.pdf"), FormatCategory::Pdf);
/// assert_eq!(classify("text/markdown", "README.md"), FormatCategory::Text);
/// assert_eq!(classify("application/zip", "archive.zip"), FormatCategory::Unsupported);
/// ```
pub fn classify(mime_type: &str, file_name: &str) -> FormatCategory {
    RULES
        .iter()
        .find(|(matches, _)| matches(mime_type, file_name))
        .map(|(_, category)| *category)
        .unwrap_or(FormatCategory::Unsupported)
}
