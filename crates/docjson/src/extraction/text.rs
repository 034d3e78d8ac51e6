//! Plain-text extraction.

use serde_json::Value;

use crate::error::Result;
use crate::types::Record;

/// Wrap UTF-8 text verbatim as `{text}`.
///
/// # Errors
///
/// Returns `DocjsonError::Decode` if the bytes are not valid UTF-8, which
/// usually means binary content was declared as text.
pub fn extract_text(bytes: &[u8]) -> Result<Record> {
    let text = String::from_utf8(bytes.to_vec())?;
    let mut record = Record::new();
    record.insert("text".to_string(), Value::String(text));
    Ok(record)
}
