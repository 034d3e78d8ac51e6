//! JSON extractor.

use crate::Result;
use crate::core::config::ConversionConfig;
use crate::extraction::structured::parse_json;
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;

/// Passes JSON documents through as records.
pub struct JsonExtractor;

impl Default for JsonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for JsonExtractor {
    fn name(&self) -> &str {
        "json-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl DocumentExtractor for JsonExtractor {
    fn category(&self) -> FormatCategory {
        FormatCategory::Json
    }

    async fn extract_bytes(&self, content: &[u8], _config: &ConversionConfig) -> Result<ExtractionResult> {
        parse_json(content)
    }
}
