//! PDF text and metadata extraction using `lopdf`.

use lopdf::{Dictionary, Document, Object};
use serde_json::{Number, Value};

use crate::error::{DocjsonError, Result};
use crate::types::Record;

/// Extract `{text, pages, info}` from a PDF.
///
/// `text` is the text of every page in page order, `pages` the page count and
/// `info` the document information dictionary plus `PDFFormatVersion`.
///
/// # Errors
///
/// Returns `DocjsonError::ExtractionFailed` if the document cannot be loaded
/// or its text cannot be decoded (corrupt or encrypted files).
pub fn extract_pdf(bytes: &[u8]) -> Result<Record> {
    let document = Document::load_mem(bytes)
        .map_err(|e| DocjsonError::extraction_failed_with_source(format!("Failed to load PDF: {}", e), e))?;

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let text = if page_numbers.is_empty() {
        String::new()
    } else {
        document
            .extract_text(&page_numbers)
            .map_err(|e| DocjsonError::extraction_failed_with_source(format!("Failed to extract PDF text: {}", e), e))?
    };

    let mut record = Record::new();
    record.insert("text".to_string(), Value::String(text));
    record.insert("pages".to_string(), Value::from(page_numbers.len()));
    record.insert("info".to_string(), Value::Object(document_info(&document)));
    Ok(record)
}

fn document_info(document: &Document) -> Record {
    let mut info = Record::new();
    info.insert(
        "PDFFormatVersion".to_string(),
        Value::String(document.version.clone()),
    );

    if let Some(dictionary) = info_dictionary(document) {
        for (key, object) in dictionary.iter() {
            let key = String::from_utf8_lossy(key).into_owned();
            if let Some(value) = object_value(document, object) {
                info.insert(key, value);
            }
        }
    }

    info
}

fn info_dictionary(document: &Document) -> Option<&Dictionary> {
    let reference = document.trailer.get(b"Info").ok()?;
    let (_, object) = document.dereference(reference).ok()?;
    object.as_dict().ok()
}

/// Scalar metadata values only; nested structures are skipped.
fn object_value(document: &Document, object: &Object) -> Option<Value> {
    match object {
        Object::String(bytes, _) => Some(Value::String(decode_pdf_string(bytes))),
        Object::Name(name) => Some(Value::String(String::from_utf8_lossy(name).into_owned())),
        Object::Integer(i) => Some(Value::from(*i)),
        Object::Real(r) => Number::from_f64(f64::from(*r)).map(Value::Number),
        Object::Boolean(b) => Some(Value::Bool(*b)),
        Object::Reference(_) => {
            let (_, target) = document.dereference(object).ok()?;
            match target {
                Object::Reference(_) => None,
                other => object_value(document, other),
            }
        }
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with a byte order mark, UTF-8 with a
/// BOM, otherwise PDFDocEncoding approximated as Latin-1.
pub fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }
    bytes.iter().map(|&b| char::from(b)).collect()
}
