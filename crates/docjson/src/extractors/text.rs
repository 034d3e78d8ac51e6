//! Plain-text extractor.

use crate::Result;
use crate::core::config::ConversionConfig;
use crate::extraction::text::extract_text;
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;

pub struct PlainTextExtractor;

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for PlainTextExtractor {
    fn name(&self) -> &str {
        "plain-text-extractor"
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
impl DocumentExtractor for PlainTextExtractor {
    fn category(&self) -> FormatCategory {
        FormatCategory::Text
    }

    async fn extract_bytes(&self, content: &[u8], _config: &ConversionConfig) -> Result<ExtractionResult> {
        extract_text(content).map(ExtractionResult::Single)
    }
}
