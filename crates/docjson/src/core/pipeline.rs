//! Single-item conversion: decode → classify → extract → normalize.

use crate::core::config::ConversionConfig;
use crate::core::io::{attachment, decode_payload};
use crate::core::mime::classify;
use crate::core::normalize::normalize;
use crate::plugins::ExtractorRegistry;
use crate::types::{FormatCategory, InputItem, Record};
use crate::{DocjsonError, Result};

/// Convert one item into output records.
///
/// `config` must already be resolved for this item (see
/// [`ConversionConfig::resolve_for`]).
///
/// # Errors
///
/// - `DocjsonError::MissingBinaryData` - no attachment under `binary_property_name`
/// - `DocjsonError::Decode` - the payload is not base64, or text/JSON decoding failed
/// - `DocjsonError::UnsupportedFormat` - no classification rule matched
/// - `DocjsonError::ExtractionFailed` - the format engine rejected the content
pub async fn process_item(
    item: &InputItem,
    config: &ConversionConfig,
    registry: &ExtractorRegistry,
) -> Result<Vec<Record>> {
    let binary = attachment(item, &config.binary_property_name)?;
    let bytes = decode_payload(&binary.data)?;
    let file_name = binary.file_name_or_default();

    let category = classify(&binary.mime_type, file_name);
    tracing::debug!(
        file_name,
        mime_type = %binary.mime_type,
        category = %category,
        size_bytes = bytes.len(),
        "Classified attachment"
    );

    if category == FormatCategory::Unsupported {
        return Err(DocjsonError::UnsupportedFormat(binary.mime_type.clone()));
    }

    let extractor = registry
        .get(category)
        .ok_or_else(|| DocjsonError::UnsupportedFormat(binary.mime_type.clone()))?;

    let result = extractor.extract_bytes(&bytes, config).await?;
    Ok(normalize(result, file_name, config.include_file_name))
}
