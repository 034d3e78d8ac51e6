//! Core data types: input items, extraction results and output records.

use crate::core::config::ConfigOverrides;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A flat, ordered mapping of field name to value.
///
/// Key order is insertion order, so `row_number` stays in front of the
/// column fields and `file_name` lands at the end.
pub type Record = Map<String, Value>;

/// File name used when an attachment does not carry one.
pub const UNKNOWN_FILE_NAME: &str = "unknown";

/// One named binary attachment on an input item.
///
/// Field names follow the host's wire format (`data`, `mimeType`, `fileName`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryData {
    /// Base64-encoded file contents.
    pub data: String,

    /// Declared MIME type. May be empty or wrong.
    #[serde(default)]
    pub mime_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl BinaryData {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>, file_name: Option<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
            file_name,
        }
    }

    /// Build an attachment from raw bytes, encoding them as base64.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>, file_name: Option<String>) -> Self {
        Self::new(crate::core::io::encode_payload(bytes), mime_type, file_name)
    }

    /// The attachment's file name, or `"unknown"` when absent or empty.
    pub fn file_name_or_default(&self) -> &str {
        self.file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_FILE_NAME)
    }
}

/// One unit of work in a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputItem {
    /// Named attachments. The pipeline reads exactly one of them.
    #[serde(default)]
    pub binary: HashMap<String, BinaryData>,

    /// Per-item parameter values that override the batch configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ConfigOverrides>,
}

impl InputItem {
    /// Create an item with a single attachment under `property`.
    pub fn with_binary(property: impl Into<String>, binary: BinaryData) -> Self {
        let mut attachments = HashMap::with_capacity(1);
        attachments.insert(property.into(), binary);
        Self {
            binary: attachments,
            parameters: None,
        }
    }

    pub fn with_parameters(mut self, parameters: ConfigOverrides) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// File-format category derived from the MIME type and file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    Pdf,
    Word,
    Spreadsheet,
    Csv,
    Image,
    Json,
    Text,
    Unsupported,
}

impl FormatCategory {
    pub const SUPPORTED: [FormatCategory; 7] = [
        FormatCategory::Pdf,
        FormatCategory::Word,
        FormatCategory::Spreadsheet,
        FormatCategory::Csv,
        FormatCategory::Image,
        FormatCategory::Json,
        FormatCategory::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatCategory::Pdf => "pdf",
            FormatCategory::Word => "word",
            FormatCategory::Spreadsheet => "spreadsheet",
            FormatCategory::Csv => "csv",
            FormatCategory::Image => "image",
            FormatCategory::Json => "json",
            FormatCategory::Text => "text",
            FormatCategory::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for FormatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an extractor produced: one record, or an ordered sequence that fans
/// out into one output record each.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Single(Record),
    Many(Vec<Record>),
}

impl ExtractionResult {
    /// Number of output records this result will produce.
    pub fn len(&self) -> usize {
        match self {
            ExtractionResult::Single(_) => 1,
            ExtractionResult::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rows read from one worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetResult {
    pub sheet_name: String,
    pub rows: Vec<Record>,
}

/// One entry of a batch's output.
///
/// Serializes as the record itself, or as `{"error": "..."}` for an item that
/// failed while `continue_on_failure` was set. Output is write-only: a record
/// may itself carry an `error` key, so the JSON form cannot be read back
/// unambiguously. Use [`OutputItem::is_error`] on the typed value instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputItem {
    Error { error: String },
    Record(Record),
}

impl OutputItem {
    pub fn is_error(&self) -> bool {
        matches!(self, OutputItem::Error { .. })
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            OutputItem::Record(record) => Some(record),
            OutputItem::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            OutputItem::Error { error } => Some(error),
            OutputItem::Record(_) => None,
        }
    }
}

/// Build a [`Record`] from `(key, value)` pairs, keeping their order.
pub fn record<I, K>(fields: I) -> Record
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
