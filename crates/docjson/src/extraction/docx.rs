//! Word (DOCX) raw-text extraction using docx-lite.

use serde_json::Value;

use crate::error::{DocjsonError, Result};
use crate::types::Record;

/// Extract the raw text of a DOCX document.
///
/// # Errors
///
/// Returns `DocjsonError::ExtractionFailed` if the bytes are not a readable DOCX package.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    docx_lite::extract_text_from_bytes(bytes)
        .map_err(|e| DocjsonError::extraction_failed(format!("DOCX text extraction failed: {}", e)))
}

/// Extract `{text}` from a Word document.
pub fn extract_word(bytes: &[u8]) -> Result<Record> {
    let text = extract_text(bytes)?;
    let mut record = Record::new();
    record.insert("text".to_string(), Value::String(text));
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zip_is_extraction_failure() {
        let err = extract_word(b"plain bytes, not a docx").unwrap_err();
        assert!(matches!(err, DocjsonError::ExtractionFailed { .. }));
        assert!(err.to_string().contains("DOCX text extraction failed"));
    }
}
