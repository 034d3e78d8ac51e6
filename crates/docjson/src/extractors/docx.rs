//! Word document extractor.

use crate::Result;
use crate::core::batch_mode::run_blocking;
use crate::core::config::ConversionConfig;
use crate::extraction::docx::extract_word;
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;

/// Raw text from DOCX documents.
pub struct WordExtractor;

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WordExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for WordExtractor {
    fn name(&self) -> &str {
        "word-extractor"
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
impl DocumentExtractor for WordExtractor {
    fn category(&self) -> FormatCategory {
        FormatCategory::Word
    }

    #[tracing::instrument(
        skip(self, content, _config),
        fields(extractor.name = self.name(), content.size_bytes = content.len())
    )]
    async fn extract_bytes(&self, content: &[u8], _config: &ConversionConfig) -> Result<ExtractionResult> {
        let record = run_blocking(content, extract_word).await?;
        Ok(ExtractionResult::Single(record))
    }
}
