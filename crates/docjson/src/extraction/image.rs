//! Image text extraction through OCR.

use serde_json::Value;

use crate::error::Result;
use crate::ocr::{OcrEngine, recognize_image};
use crate::types::Record;

/// Value of `extracted_by` on OCR results.
pub const EXTRACTED_BY_OCR: &str = "OCR";

/// Recognize the text of an image as `{text, extracted_by: "OCR"}`.
///
/// A session is acquired from `engine` for this call only and released
/// before returning, on success and on failure.
///
/// # Errors
///
/// Returns `DocjsonError::ExtractionFailed` if the engine is unavailable, the
/// language code is invalid or recognition fails.
pub fn extract_image(engine: &dyn OcrEngine, bytes: &[u8], language: &str) -> Result<Record> {
    let text = recognize_image(engine, bytes, language)?;

    let mut record = Record::new();
    record.insert("text".to_string(), Value::String(text));
    record.insert("extracted_by".to_string(), Value::String(EXTRACTED_BY_OCR.to_string()));
    Ok(record)
}
