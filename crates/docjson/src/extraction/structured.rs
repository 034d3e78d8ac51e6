//! JSON extraction.

use serde_json::Value;

use crate::error::{DocjsonError, Result};
use crate::types::{ExtractionResult, Record};

/// Key used to wrap values that are not JSON objects.
pub const VALUE_KEY: &str = "value";

/// Parse a JSON document into records.
///
/// - object → `Single(object)`
/// - array → `Many`, one record per element; non-object elements are wrapped as `{value}`
/// - any other value → `Single({value})`
///
/// A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns `DocjsonError::Decode` if the bytes are not UTF-8 or not valid JSON.
pub fn parse_json(data: &[u8]) -> Result<ExtractionResult> {
    let text = std::str::from_utf8(data)
        .map_err(|e| DocjsonError::decode_with_source(format!("JSON payload is not valid UTF-8: {}", e), e))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let value: Value = serde_json::from_str(text)
        .map_err(|e| DocjsonError::decode_with_source(format!("Failed to parse JSON: {}", e), e))?;

    Ok(match value {
        Value::Object(object) => ExtractionResult::Single(object),
        Value::Array(elements) => ExtractionResult::Many(elements.into_iter().map(into_record).collect()),
        scalar => ExtractionResult::Single(wrap(scalar)),
    })
}

fn into_record(value: Value) -> Record {
    match value {
        Value::Object(object) => object,
        other => wrap(other),
    }
}

fn wrap(value: Value) -> Record {
    let mut record = Record::new();
    record.insert(VALUE_KEY.to_string(), value);
    record
}
