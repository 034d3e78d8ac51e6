//! Output normalization.
//!
//! Turns an [`ExtractionResult`] into the flat list of records that leave the
//! pipeline, stamping each with the source file name when requested.

use crate::types::{ExtractionResult, Record};
use serde_json::Value;

/// Key added to every record when file names are included.
pub const FILE_NAME_KEY: &str = "file_name";

/// Flatten an extraction result into output records.
///
/// `Single` yields one record and `Many` fans out into one record per element,
/// in order. With `include_file_name`, `file_name` is set on every record,
/// replacing any value the extractor produced under that key.
pub fn normalize(result: ExtractionResult, file_name: &str, include_file_name: bool) -> Vec<Record> {
    let mut records = match result {
        ExtractionResult::Single(record) => vec![record],
        ExtractionResult::Many(records) => records,
    };

    if include_file_name {
        for record in &mut records {
            // Remove first so the key moves to the end of the record.
            record.shift_remove(FILE_NAME_KEY);
            record.insert(FILE_NAME_KEY.to_string(), Value::String(file_name.to_string()));
        }
    }

    records
}
